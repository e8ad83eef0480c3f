/// Splits a command line into arguments
///
/// Arguments are separated by whitespace. Double quotes group words into
/// one argument, `""` is an empty argument, and `\"` / `\\` escape inside
/// quotes.
pub struct Parser;

impl Parser {
    /// Parse a line into its arguments, or `None` if a quote is left open
    pub fn parse(line: &str) -> Option<Vec<String>> {
        let mut args = Vec::new();
        let mut current = String::new();
        let mut in_arg = false;
        let mut chars = line.chars();

        while let Some(c) = chars.next() {
            match c {
                '"' => {
                    in_arg = true;
                    Self::read_quoted(&mut chars, &mut current)?;
                }
                c if c.is_whitespace() => {
                    if in_arg {
                        args.push(std::mem::take(&mut current));
                        in_arg = false;
                    }
                }
                c => {
                    in_arg = true;
                    current.push(c);
                }
            }
        }

        if in_arg {
            args.push(current);
        }
        Some(args)
    }

    fn read_quoted(chars: &mut std::str::Chars<'_>, out: &mut String) -> Option<()> {
        loop {
            match chars.next()? {
                '"' => return Some(()),
                '\\' => match chars.next()? {
                    c @ ('"' | '\\') => out.push(c),
                    c => {
                        out.push('\\');
                        out.push(c);
                    }
                },
                c => out.push(c),
            }
        }
    }
}
