//! Turn a tokenized line into a [`Command`].
//!
//! Grammar:
//!
//! ```text
//! ping | seed
//! charge add <a> <b> <cost>
//! charge remove <a> <b>
//! charge adjacent <id>
//! charge path <origin> <destination>
//! charge init [<a> <b> <cost>]...
//! point create <id> <name...>
//! point update <id> <name...>
//! point delete <id>
//! point get <id>
//! point list
//! point init [<id> <name>]...
//! {"command": ...}            (raw JSON)
//! ```

use chargegraph_core::PointId;
use chargegraph_executor::{ChargeInput, Command, PointInput};

/// Parse `tokens` into a command. The error is a message for the user.
pub fn parse_command(tokens: &[String]) -> Result<Command, String> {
    let Some(first) = tokens.first() else {
        return Err("empty command".to_string());
    };
    if first.starts_with('{') {
        let json = tokens.join(" ");
        return serde_json::from_str(&json).map_err(|e| format!("invalid JSON command: {}", e));
    }

    let args: Vec<&str> = tokens.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["ping"] => Ok(Command::Ping),
        ["seed"] => Ok(Command::Seed),
        ["charge", rest @ ..] => parse_charge(rest),
        ["point", rest @ ..] => parse_point(rest),
        [other, ..] => Err(format!("unknown command '{}'", other)),
        [] => Err("empty command".to_string()),
    }
}

fn parse_charge(args: &[&str]) -> Result<Command, String> {
    match args {
        ["add", a, b, cost] => Ok(Command::ChargeAdd {
            origin: parse_id(a)?,
            destination: parse_id(b)?,
            cost: parse_cost(cost)?,
        }),
        ["remove", a, b] => Ok(Command::ChargeRemove {
            origin: parse_id(a)?,
            destination: parse_id(b)?,
        }),
        ["adjacent", id] => Ok(Command::ChargeAdjacent { id: parse_id(id)? }),
        ["path", a, b] => Ok(Command::ChargeMinPath {
            origin: parse_id(a)?,
            destination: parse_id(b)?,
        }),
        ["init", triples @ ..] => {
            if triples.len() % 3 != 0 {
                return Err("charge init expects <a> <b> <cost> triples".to_string());
            }
            let charges = triples
                .chunks(3)
                .map(|t| {
                    Ok(ChargeInput::new(
                        parse_id(t[0])?,
                        parse_id(t[1])?,
                        parse_cost(t[2])?,
                    ))
                })
                .collect::<Result<Vec<_>, String>>()?;
            Ok(Command::ChargeInit { charges })
        }
        [sub, ..] => Err(format!("usage: charge {} ... (see 'help')", sub)),
        [] => Err("usage: charge <add|remove|adjacent|path|init> ...".to_string()),
    }
}

fn parse_point(args: &[&str]) -> Result<Command, String> {
    match args {
        ["create", id, name @ ..] if !name.is_empty() => Ok(Command::PointCreate {
            id: parse_id(id)?,
            name: name.join(" "),
        }),
        ["update", id, name @ ..] if !name.is_empty() => Ok(Command::PointUpdate {
            id: parse_id(id)?,
            name: name.join(" "),
        }),
        ["delete", id] => Ok(Command::PointDelete { id: parse_id(id)? }),
        ["get", id] => Ok(Command::PointGet { id: parse_id(id)? }),
        ["list"] => Ok(Command::PointList),
        ["init", pairs @ ..] => {
            if pairs.len() % 2 != 0 {
                return Err("point init expects <id> <name> pairs".to_string());
            }
            let points = pairs
                .chunks(2)
                .map(|p| {
                    Ok(PointInput {
                        id: parse_id(p[0])?,
                        name: p[1].to_string(),
                    })
                })
                .collect::<Result<Vec<_>, String>>()?;
            Ok(Command::PointInit { points })
        }
        [sub, ..] => Err(format!("usage: point {} ... (see 'help')", sub)),
        [] => Err("usage: point <create|update|delete|get|list|init> ...".to_string()),
    }
}

fn parse_id(s: &str) -> Result<PointId, String> {
    s.parse::<PointId>()
        .map_err(|_| format!("'{}' is not a valid selling point id", s))
}

fn parse_cost(s: &str) -> Result<f64, String> {
    s.parse::<f64>()
        .map_err(|_| format!("'{}' is not a valid cost", s))
}

/// Help text printed by the REPL.
pub const HELP: &str = "\
Commands:
  charge add <a> <b> <cost>        add or overwrite a charge
  charge remove <a> <b>            remove a direct connection
  charge adjacent <id>             direct neighbors of a point
  charge path <origin> <dest>      cheapest path between two points
  charge init [<a> <b> <cost>]...  replace every charge
  point create <id> <name>         add a selling point
  point update <id> <name>         rename a selling point
  point delete <id>                remove a selling point
  point get <id>                   look up a selling point
  point list                       list selling points
  point init [<id> <name>]...      replace every selling point
  seed                             load the default dataset
  ping                             check the service
  help | quit";
