pub fn render(template: &str, variables: &[(&str, &str)]) -> String {
    let mut result = template.to_string();

    for (key, value) in variables {
        let placeholder = format!("{{{{{}}}}}", key);
        result = result.replace(&placeholder, value);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_substitutes_placeholders() {
        let result = render("hello {{name}}", &[("name", "world")]);
        assert_eq!(result, "hello world");
    }

    #[test]
    fn render_substitutes_repeated_placeholders() {
        let result = render("{{x}} and {{x}}", &[("x", "y")]);
        assert_eq!(result, "y and y");
    }

    #[test]
    fn render_leaves_unknown_placeholders() {
        let result = render("{{known}} {{unknown}}", &[("known", "v")]);
        assert_eq!(result, "v {{unknown}}");
    }
}
