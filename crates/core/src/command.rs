/// What a submitted line asks for. Anything unrecognized is plain input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    HistoryList,
    HistoryClear,
    HistoryShow(usize),
    ClearScreen,
    Exit,
    Echo(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let words: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();
        match words.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
            ["history"] => Command::HistoryList,
            ["history", "clear"] => Command::HistoryClear,
            ["history", n] => match n.parse::<usize>() {
                Ok(n) => Command::HistoryShow(n),
                Err(_) => Command::Echo(line.to_string()),
            },
            ["clear"] => Command::ClearScreen,
            ["exit"] | ["quit"] => Command::Exit,
            _ => Command::Echo(line.to_string()),
        }
    }
}
