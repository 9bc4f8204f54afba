/// Converts a camel case identifier into its snake case form.
///
/// An underscore is inserted before every uppercase character except the first one, then
/// every character is lowercased. The conversion works on single `char`s, acronyms are not
/// detected (`"ID"` becomes `"i_d"`) and grapheme clusters are not taken into account.
pub fn underscore_name(name: &str) -> String {
    let mut result = String::with_capacity(name.len() + name.len() / 4);
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i != 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::underscore_name;

    #[test]
    fn underscore() {
        assert_eq!(underscore_name("TestModel"), "test_model");
        assert_eq!(underscore_name("FirstName"), "first_name");
        assert_eq!(underscore_name("first_name"), "first_name");
        assert_eq!(underscore_name("Id"), "id");
        assert_eq!(underscore_name("ID"), "i_d");
        assert_eq!(underscore_name("already_Mixed"), "already__mixed");
        assert_eq!(underscore_name(""), "");
        assert_eq!(underscore_name("ÀbcÉf"), "àbc_éf");
    }
}
