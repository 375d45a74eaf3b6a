use users_core::Field;

pub const HELP: &str = "\
commands:
  list                  show the listing again
  like <id>             toggle the liked flag
  edit <id>             open the edit form
  set <field> <value>   change name, email, phone or website in the open form
  save                  validate and apply the open form
  cancel                close the form without saving
  delete <id>           remove a user (asks first)
  help                  show this text
  quit                  exit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    List,
    Like(u64),
    Edit(u64),
    Set(Field, String),
    Save,
    Cancel,
    Delete(u64),
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    match verb.to_ascii_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "like" => parse_id(rest).map(Command::Like),
        "edit" => parse_id(rest).map(Command::Edit),
        "delete" | "rm" => parse_id(rest).map(Command::Delete),
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            if field.is_empty() {
                return Err("usage: set <field> <value>".to_string());
            }
            Ok(Command::Set(field.parse()?, value.trim().to_string()))
        }
        "save" | "ok" => Ok(Command::Save),
        "cancel" => Ok(Command::Cancel),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}', type help")),
    }
}

fn parse_id(s: &str) -> Result<u64, String> {
    if s.is_empty() {
        return Err("missing user id".to_string());
    }
    s.parse().map_err(|_| format!("'{s}' is not a user id"))
}

/// Interpret a confirmation answer. Anything but an explicit yes is a no.
pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
