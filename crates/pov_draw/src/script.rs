//! Line based drawing scripts
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! width 48
//! pattern heart
//! text 4 2 HI THERE
//! letter A 0 40
//! line 0 0 15 47
//! circle 8 24 8 30
//! fill-circle 8 24 3
//! draw 0 0 0 5 3 5
//! erase 0 2
//! clear
//! format hanzi
//! undo
//! redo
//! ```
//!
//! `draw`/`erase` take a pointer path and run it as one freehand stroke;
//! `line`/`circle` run as a drag from the first point to the second.

use anyhow::{anyhow, bail, Context, Result};
use pov_engine::{EditState, Format, PatternKind, Point, PovUndoState, Tool};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Pattern(PatternKind),
    Text { row: i32, col: i32, text: String },
    Letter { letter: char, row: i32, col: i32 },
    Line(Point, Point),
    Circle(Point, Point),
    FillCircle(Point, i32),
    Stroke { tool: Tool, path: Vec<Point> },
    Clear,
    Format(Format),
    Width(i32),
    Undo,
    Redo,
}

/// A parsed command with its 1-based source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: ScriptCommand,
}

pub fn parse_script(src: &str) -> Result<Vec<ScriptLine>> {
    let mut result = Vec::new();
    for (idx, text) in src.lines().enumerate() {
        let line = idx + 1;
        if let Some(command) = parse_line(text).with_context(|| format!("line {line}: {}", text.trim()))? {
            result.push(ScriptLine { line, command });
        }
    }
    Ok(result)
}

/// Parse one line. Blank lines and comments yield `None`.
pub fn parse_line(text: &str) -> Result<Option<ScriptCommand>> {
    let text = match text.find('#') {
        Some(pos) => &text[..pos],
        None => text,
    };
    let mut words = text.split_whitespace();
    let Some(cmd) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let command = match cmd.to_lowercase().as_str() {
        "pattern" => {
            expect_args(&args, 1)?;
            ScriptCommand::Pattern(args[0].parse()?)
        }
        "text" => {
            if args.len() < 3 {
                bail!("expected: text <row> <col> <text>");
            }
            // Keep inner spacing; spaces advance the cursor
            let rest = text.trim_start()[cmd.len()..].trim_start();
            let rest = rest[args[0].len()..].trim_start();
            let rest = rest[args[1].len()..].trim_start().trim_end();
            ScriptCommand::Text {
                row: number(args[0])?,
                col: number(args[1])?,
                text: rest.to_string(),
            }
        }
        "letter" => {
            expect_args(&args, 3)?;
            let mut chars = args[0].chars();
            let (Some(letter), None) = (chars.next(), chars.next()) else {
                bail!("expected a single letter, got '{}'", args[0]);
            };
            ScriptCommand::Letter {
                letter,
                row: number(args[1])?,
                col: number(args[2])?,
            }
        }
        "line" => {
            expect_args(&args, 4)?;
            let pts = points(&args)?;
            ScriptCommand::Line(pts[0], pts[1])
        }
        "circle" => {
            expect_args(&args, 4)?;
            let pts = points(&args)?;
            ScriptCommand::Circle(pts[0], pts[1])
        }
        "fill-circle" | "fill_circle" => {
            expect_args(&args, 3)?;
            ScriptCommand::FillCircle(Point::new(number(args[0])?, number(args[1])?), number(args[2])?)
        }
        "draw" | "erase" => {
            if args.is_empty() || args.len() % 2 != 0 {
                bail!("expected: {cmd} <row> <col> [<row> <col> ...]");
            }
            ScriptCommand::Stroke {
                tool: cmd.parse()?,
                path: points(&args)?,
            }
        }
        "clear" => {
            expect_args(&args, 0)?;
            ScriptCommand::Clear
        }
        "format" => {
            expect_args(&args, 1)?;
            ScriptCommand::Format(args[0].parse()?)
        }
        "width" => {
            expect_args(&args, 1)?;
            ScriptCommand::Width(number(args[0])?)
        }
        "undo" => {
            expect_args(&args, 0)?;
            ScriptCommand::Undo
        }
        "redo" => {
            expect_args(&args, 0)?;
            ScriptCommand::Redo
        }
        _ => bail!("unknown command '{cmd}'"),
    };
    Ok(Some(command))
}

/// Execute parsed commands in order, stopping at the first failure
pub fn run_script(state: &mut EditState, script: &[ScriptLine]) -> Result<()> {
    for line in script {
        run_command(state, &line.command).with_context(|| format!("line {}", line.line))?;
    }
    Ok(())
}

pub fn run_command(state: &mut EditState, command: &ScriptCommand) -> Result<()> {
    log::debug!("run {:?}", command);
    match command {
        ScriptCommand::Pattern(kind) => {
            state.apply_pattern(*kind);
        }
        ScriptCommand::Text { row, col, text } => {
            state.place_text(text, *row, *col)?;
        }
        ScriptCommand::Letter { letter, row, col } => {
            state.place_letter(*letter, *row, *col)?;
        }
        ScriptCommand::Line(from, to) => drag(state, Tool::Line, &[*from, *to]),
        ScriptCommand::Circle(center, edge) => drag(state, Tool::Circle, &[*center, *edge]),
        ScriptCommand::FillCircle(center, radius) => {
            state.fill_circle(*center, *radius, true);
        }
        ScriptCommand::Stroke { tool, path } => drag(state, *tool, path),
        ScriptCommand::Clear => {
            state.clear();
        }
        ScriptCommand::Format(format) => state.set_format(*format),
        ScriptCommand::Width(width) => state.set_width(*width)?,
        ScriptCommand::Undo => state.undo()?,
        ScriptCommand::Redo => state.redo()?,
    }
    Ok(())
}

/// Press at the first point, move through the rest and release
pub fn drag(state: &mut EditState, tool: Tool, path: &[Point]) {
    let Some((first, rest)) = path.split_first() else {
        return;
    };
    let previous_tool = state.tool();
    state.set_tool(tool);
    state.begin_gesture(*first);
    for pt in rest {
        state.update_gesture(*pt);
    }
    state.commit_gesture();
    state.set_tool(previous_tool);
}

fn expect_args(args: &[&str], count: usize) -> Result<()> {
    if args.len() != count {
        bail!("expected {count} argument(s), got {}", args.len());
    }
    Ok(())
}

fn number(arg: &str) -> Result<i32> {
    arg.parse::<i32>().map_err(|_| anyhow!("'{arg}' is not a number"))
}

fn points(args: &[&str]) -> Result<Vec<Point>> {
    args.chunks(2)
        .map(|pair| -> Result<Point> { Ok(Point::new(number(pair[0])?, number(pair[1])?)) })
        .collect()
}
