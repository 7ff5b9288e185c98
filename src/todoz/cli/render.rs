use chrono::Utc;
use console::style;
use timeago::Formatter;
use todoz::engine::items_left_label;
use todoz::model::{Filter, Task};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TEXT_WIDTH: usize = 60;

/// Last view the engine emitted.
#[derive(Default)]
pub(super) struct Snapshot {
    pub visible: Vec<Task>,
    pub items_left: usize,
}

pub(super) fn print_list(snapshot: &Snapshot, filter: Filter) {
    if filter != Filter::All {
        println!("{}", style(format!("filter: {}", filter)).dim());
    }

    if snapshot.visible.is_empty() {
        println!("{}", style(empty_line(filter)).dim());
    } else {
        let formatter = Formatter::new();
        for (i, task) in snapshot.visible.iter().enumerate() {
            let marker = if task.completed { "[x]" } else { "[ ]" };
            let text = truncate(&task.text, TEXT_WIDTH);
            let age = format_time_ago(&formatter, task);
            let line = format!("{:>3} {} {}", i + 1, marker, text);
            if task.completed {
                println!("{}  {}", style(line).dim().strikethrough(), style(age).dim());
            } else {
                println!("{}  {}", line, style(age).dim());
            }
        }
    }

    println!("{}", style(items_left_label(snapshot.items_left)).dim());
}

fn format_time_ago(formatter: &Formatter, task: &Task) -> String {
    let duration = Utc::now().signed_duration_since(task.created_at);
    formatter.convert(duration.to_std().unwrap_or_default())
}

fn empty_line(filter: Filter) -> &'static str {
    match filter {
        Filter::All => "Nothing to do.",
        Filter::Active => "No active tasks.",
        Filter::Completed => "No completed tasks.",
    }
}

fn truncate(text: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(text) <= max_width {
        return text.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in text.chars() {
        let char_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
