//! 控制台命令解析

/// 控制台命令
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load,
    Search(String),
    Select(usize),
    Delete,
    Add,
    Status,
    Clear,
    Help,
    Quit,
    Empty,
}

pub const HELP: &str = "\
Commands:
  load              load all materials
  search <text>     find materials whose name or type contains <text>
  select <n>        select row <n> of the table
  delete            delete the selected material
  add               add a material
  status            check the database connection
  clear             clear messages
  help              show this help
  quit              exit";

impl Command {
    /// 命令词之后只去掉一个分隔空白，搜索词其余部分原样保留
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim_start();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "" => Ok(Command::Empty),
            "load" | "l" => Ok(Command::Load),
            "search" | "s" | "find" => Ok(Command::Search(rest.to_string())),
            "select" => rest
                .trim()
                .parse::<usize>()
                .map(Command::Select)
                .map_err(|_| format!("Usage: select <row number>, got '{}'", rest.trim())),
            "delete" | "del" | "rm" => Ok(Command::Delete),
            "add" | "new" => Ok(Command::Add),
            "status" => Ok(Command::Status),
            "clear" => Ok(Command::Clear),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(format!("Unknown command '{}', type 'help'", other)),
        }
    }
}
