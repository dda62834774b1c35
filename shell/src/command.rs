/// One line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// `/search <terms...>`
    Search(&'a str),
    /// `/df`
    DocFreq,
    /// `/tf <term> <doc_id>`
    TermFreq { term: &'a str, doc_id: &'a str },
    /// `/exit`
    Exit,
    Empty,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim_start();
        let (name, rest) = match line.find(char::is_whitespace) {
            Some(pos) => (&line[..pos], &line[pos..]),
            None => (line, ""),
        };
        match name {
            "" => Command::Empty,
            "/search" => Command::Search(rest),
            "/df" if rest.trim().is_empty() => Command::DocFreq,
            "/exit" if rest.trim().is_empty() => Command::Exit,
            "/tf" => {
                let mut args = rest.split_whitespace();
                match (args.next(), args.next()) {
                    (Some(term), Some(doc_id)) => Command::TermFreq { term, doc_id },
                    _ => Command::Unknown(line.trim_end()),
                }
            }
            _ => Command::Unknown(line.trim_end()),
        }
    }
}
