#[cfg(test)]
mod tests {
    use tern_core::{
        Column, Context, Expr, Expression, GenericSqlWriter, Model, Op, OrmError,
        PostgresSqlWriter, Predicate, SqlWriter, Value, col, not,
    };

    const WRITER: GenericSqlWriter = GenericSqlWriter::new();
    const POSTGRES: PostgresSqlWriter = PostgresSqlWriter::new();

    fn model() -> Model {
        Model::new(
            "test_model",
            [("age", "age"), ("first_name", "first_name"), ("odd", "we`ird")],
        )
    }

    fn render(writer: &dyn SqlWriter, expr: &dyn Expression) -> (String, Vec<Value>) {
        let model = model();
        let mut context = Context::new(&model);
        let mut out = String::new();
        expr.write_query(writer, &mut context, &mut out)
            .expect("Could not write the expression");
        (out, context.args)
    }

    #[test]
    fn build_shape() {
        let predicate = col("age").eq(18);
        let Predicate {
            left: Some(left),
            op: Op::Eq,
            right,
        } = &predicate
        else {
            panic!("Unexpected predicate {:?}", predicate);
        };
        assert!(matches!(&**left, Expr::Column(Column { name }) if name == "age"));
        assert!(matches!(**right, Expr::Value(Value::Int32(Some(18)))));

        let negated = not(predicate.clone());
        assert!(negated.left.is_none());
        assert_eq!(negated.op, Op::Not);
        assert!(matches!(*negated.right, Expr::Predicate(Predicate { op: Op::Eq, .. })));

        let combined = predicate.clone().and(negated).or(predicate);
        assert_eq!(combined.op, Op::Or);
        assert!(matches!(
            combined.left.as_deref(),
            Some(Expr::Predicate(Predicate { op: Op::And, .. }))
        ));
        assert!(matches!(
            *combined.right,
            Expr::Predicate(Predicate { op: Op::Eq, .. })
        ));
    }

    #[test]
    fn op_display() {
        assert_eq!(Op::Eq.to_string(), "=");
        assert_eq!(Op::Not.to_string(), "NOT");
        assert_eq!(Op::And.to_string(), "AND");
        assert_eq!(Op::Or.to_string(), "OR");
    }

    #[test]
    fn write_operands() {
        assert_eq!(render(&WRITER, &col("age")), ("`age`".into(), vec![]));
        assert_eq!(render(&WRITER, &col("odd")), ("`we``ird`".into(), vec![]));
        assert_eq!(
            render(&WRITER, &Value::from("Tom")),
            ("?".into(), vec![Value::from("Tom")])
        );
        assert_eq!(
            render(&POSTGRES, &Expr::Value(Value::from(1))),
            ("$1".into(), vec![Value::from(1)])
        );
    }

    #[test]
    fn write_predicates() {
        assert_eq!(
            render(&WRITER, &col("age").eq(18)),
            ("`age` = ?".into(), vec![18.into()])
        );
        assert_eq!(
            render(&WRITER, &not(col("age").eq(18))),
            (" NOT (`age` = ?)".into(), vec![18.into()])
        );
        assert_eq!(
            render(&WRITER, &not(not(col("age").eq(18)))),
            (" NOT ( NOT (`age` = ?))".into(), vec![18.into()])
        );
        assert_eq!(
            render(
                &WRITER,
                &col("age")
                    .eq(1)
                    .and(col("age").eq(2))
                    .and(col("first_name").eq("a").or(col("first_name").eq("b")))
            ),
            (
                "((`age` = ?) AND (`age` = ?)) AND ((`first_name` = ?) OR (`first_name` = ?))"
                    .into(),
                vec![1.into(), 2.into(), "a".into(), "b".into()]
            )
        );
        assert_eq!(
            render(
                &POSTGRES,
                &col("age").eq(1).or(not(col("first_name").eq("a")))
            ),
            (
                r#"("age" = $1) OR ( NOT ("first_name" = $2))"#.into(),
                vec![1.into(), "a".into()]
            )
        );
    }

    #[test]
    fn write_unknown_column() {
        let model = model();
        let mut context = Context::new(&model);
        let mut out = String::new();
        let error = col("age")
            .eq(18)
            .and(col("missing").eq(1))
            .write_query(&WRITER, &mut context, &mut out)
            .unwrap_err();
        assert_eq!(
            error.downcast_ref::<OrmError>(),
            Some(&OrmError::UnknownField("missing".into()))
        );
    }

    #[test]
    fn write_malformed_predicate() {
        let model = model();
        let cases = [
            Predicate {
                left: None,
                op: Op::And,
                right: Box::new(col("age").eq(1).into()),
            },
            Predicate {
                left: None,
                op: Op::Eq,
                right: Box::new(Value::from(1).into()),
            },
            Predicate {
                left: Some(Box::new(col("age").into())),
                op: Op::Not,
                right: Box::new(col("age").eq(1).into()),
            },
        ];
        for predicate in cases {
            let mut context = Context::new(&model);
            let mut out = String::new();
            let error = predicate
                .write_query(&WRITER, &mut context, &mut out)
                .unwrap_err();
            assert_eq!(
                error.downcast_ref::<OrmError>(),
                Some(&OrmError::MalformedPredicate(predicate.op))
            );
        }
    }
}
