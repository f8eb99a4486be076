//! Property-based tests for expression evaluation and rendering.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use proptest::sample::select;
    use radix_integers::{BigNumber, DigitBase, Notation, NumberError};

    use crate::{BinaryOp, ExprFactory, ExprNode};

    // Reference result of an operator on machine integers; None on division by zero
    fn reference(op: BinaryOp, a: i128, b: i128) -> Option<i128> {
        match op {
            BinaryOp::Add => Some(a + b),
            BinaryOp::Subtract => Some(a - b),
            BinaryOp::Multiply => Some(a * b),
            BinaryOp::Divide => (b != 0).then(|| a / b),
            BinaryOp::Modulo => (b != 0).then(|| a % b),
        }
    }

    // Strategy for generating trees paired with their expected value.
    // Depth stays small enough that every product fits in an i128.
    fn tree() -> impl Strategy<Value = (ExprNode, Option<i128>)> {
        let leaf = (-1000i64..1000i64)
            .prop_map(|v| (ExprFactory.leaf(BigNumber::from_i64(v, 10)), Some(i128::from(v))));

        leaf.prop_recursive(3, 16, 2, |inner| {
            prop_oneof![
                inner
                    .clone()
                    .prop_map(|(node, value)| (ExprFactory.negate(node), value.map(|v| -v))),
                (inner.clone(), inner, select(BinaryOp::ALL.to_vec())).prop_map(
                    |((left, lv), (right, rv), op)| {
                        let value = lv.zip(rv).and_then(|(a, b)| reference(op, a, b));
                        (ExprFactory.binary(left, right, op), value)
                    }
                ),
            ]
        })
    }

    fn token_count(node: &ExprNode) -> usize {
        match node {
            ExprNode::Number(n) if n.is_negative() => 3,
            ExprNode::Number(_) => 1,
            ExprNode::Unary { operand, .. } => 1 + token_count(operand),
            ExprNode::Binary { left, right, .. } => 1 + token_count(left) + token_count(right),
        }
    }

    fn binary_count(node: &ExprNode) -> usize {
        let own = usize::from(matches!(node, ExprNode::Binary { .. }));
        own + node.children().into_iter().map(binary_count).sum::<usize>()
    }

    proptest! {
        #[test]
        fn evaluate_matches_reference((node, expected) in tree()) {
            let decimal = DigitBase::decimal();
            match expected {
                Some(v) => {
                    let value = node.evaluate().unwrap();
                    let text = value.render(&decimal, Notation::Infix).unwrap();
                    prop_assert_eq!(text, v.to_string());
                }
                None => prop_assert_eq!(node.evaluate(), Err(NumberError::DivideByZero)),
            }
        }

        #[test]
        fn into_value_matches_evaluate((node, _) in tree()) {
            let borrowed = node.evaluate();
            prop_assert_eq!(node.into_value(), borrowed);
        }

        #[test]
        fn prefix_and_postfix_token_counts((node, _) in tree()) {
            let decimal = DigitBase::decimal();
            let expected = token_count(&node);

            let prefix = node.render(&decimal, Notation::Prefix).unwrap();
            let postfix = node.render(&decimal, Notation::Postfix).unwrap();
            prop_assert_eq!(prefix.split(' ').count(), expected);
            prop_assert_eq!(postfix.split(' ').count(), expected);
        }

        #[test]
        fn infix_parenthesizes_binary_nodes((node, _) in tree()) {
            let decimal = DigitBase::decimal();
            let infix = node.render(&decimal, Notation::Infix).unwrap();
            let open = infix.matches('(').count();
            prop_assert_eq!(open, binary_count(&node));
            prop_assert_eq!(infix.matches(')').count(), open);
            prop_assert!(!infix.contains(' '));
        }

        #[test]
        fn postfix_ends_with_root_operator((node, _) in tree()) {
            let decimal = DigitBase::decimal();
            let prefix = node.render(&decimal, Notation::Prefix).unwrap();
            let postfix = node.render(&decimal, Notation::Postfix).unwrap();
            if let ExprNode::Binary { op, .. } = &node {
                let symbol = op.symbol().to_string();
                prop_assert!(prefix.starts_with(&symbol));
                prop_assert!(postfix.ends_with(&symbol));
            }
        }
    }
}
