use crate::parser::Program;

/// Render a program as numbered sentences, one per variable.
///
/// ```text
/// 1) The value of ace is 101.
/// 2) The value of eel is unset.
/// ```
pub fn render(program: &Program) -> String {
    let mut out = String::new();
    for (i, variable) in program.variables.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{}) The value of {} is ", i + 1, variable.name));
        match variable.value {
            Some(value) => out.push_str(&format!("{value}.")),
            None => out.push_str("unset."),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Parser;
    use pretty_assertions::assert_eq;

    fn render_source(source: &str) -> String {
        render(&Parser::parse(source).unwrap())
    }

    #[test]
    fn test_empty_program() {
        assert_eq!(render_source(""), "");
    }

    #[test]
    fn test_single_variable() {
        assert_eq!(render_source("ace(101)"), "1) The value of ace is 101.");
    }

    #[test]
    fn test_unset_and_zero() {
        assert_eq!(
            render_source("eel() zero(0)"),
            "1) The value of eel is unset.\n2) The value of zero is 0."
        );
    }

    #[test]
    fn test_full_example_in_order() {
        let source = "ace(101) box(202) cat(303)\ndoor(404)\teel() foo\t( 505 \t) goo(\n\t606\n)";
        assert_eq!(
            render_source(source),
            [
                "1) The value of ace is 101.",
                "2) The value of box is 202.",
                "3) The value of cat is 303.",
                "4) The value of door is 404.",
                "5) The value of eel is unset.",
                "6) The value of foo is 505.",
                "7) The value of goo is 606.",
            ]
            .join("\n")
        );
    }

    #[test]
    fn test_duplicate_names_kept() {
        assert_eq!(
            render_source("x(1) x(2)"),
            "1) The value of x is 1.\n2) The value of x is 2."
        );
    }
}
