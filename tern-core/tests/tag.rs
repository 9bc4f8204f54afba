#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use tern_core::{OrmError, parse_tag};

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn invalid(tag: &str) -> Option<OrmError> {
        parse_tag(Some(tag))
            .unwrap_err()
            .downcast_ref::<OrmError>()
            .cloned()
    }

    #[test]
    fn tag_missing() {
        assert_eq!(parse_tag(None).unwrap(), HashMap::new());
    }

    #[test]
    fn tag_pairs() {
        assert_eq!(
            parse_tag(Some("column=first_name_t")).unwrap(),
            map(&[("column", "first_name_t")])
        );
        assert_eq!(parse_tag(Some("column=")).unwrap(), map(&[("column", "")]));
        assert_eq!(parse_tag(Some("=x")).unwrap(), map(&[("", "x")]));
        assert_eq!(
            parse_tag(Some("column=a,index=true")).unwrap(),
            map(&[("column", "a"), ("index", "true")])
        );
        assert_eq!(
            parse_tag(Some("column=a,column=b")).unwrap(),
            map(&[("column", "b")])
        );
    }

    #[test]
    fn tag_invalid() {
        assert_eq!(
            invalid("column"),
            Some(OrmError::InvalidTagContent("column".into()))
        );
        assert_eq!(
            invalid("column=a=b"),
            Some(OrmError::InvalidTagContent("column=a=b".into()))
        );
        assert_eq!(
            invalid("column=a,"),
            Some(OrmError::InvalidTagContent("".into()))
        );
        assert_eq!(invalid(""), Some(OrmError::InvalidTagContent("".into())));
        assert_eq!(
            invalid("column=a, index"),
            Some(OrmError::InvalidTagContent(" index".into()))
        );
    }
}
