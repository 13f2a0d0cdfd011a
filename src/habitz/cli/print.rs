use chrono::Utc;
use colored::Colorize;
use habitz::api::{CmdMessage, MessageLevel};
use habitz::config::HabitzConfig;
use habitz::index::DisplayHabit;
use habitz::model::Habit;
use habitz::stats::HabitStats;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;
const DONE_MARKER: &str = "✓";
const PENDING_MARKER: &str = "○";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_habits(habits: &[DisplayHabit], total: usize) {
    if total == 0 {
        println!("No habits yet! Add your first habit to get started.");
        return;
    }
    if habits.is_empty() {
        println!("No habits match your current filters.");
        return;
    }

    for dh in habits {
        let idx_str = format!("{:>3}. ", dh.position);
        let marker = if dh.habit.completed {
            DONE_MARKER.green()
        } else {
            PENDING_MARKER.normal()
        };
        let prefix_width = idx_str.width() + 2;

        let available = LINE_WIDTH.saturating_sub(prefix_width + TIME_WIDTH);
        let name = truncate_to_width(&dh.habit.name, available);
        let padding = available.saturating_sub(name.width());
        let name = if dh.habit.completed {
            name.dimmed().strikethrough()
        } else {
            name.normal()
        };

        println!(
            "{}{} {}{}{}",
            idx_str,
            marker,
            name,
            " ".repeat(padding),
            format_time_ago(&dh.habit).dimmed()
        );
    }
}

pub(super) fn print_habit_names(habits: &[Habit]) {
    for habit in habits {
        println!("  {}", habit.name);
    }
}

pub(super) fn print_stats(stats: &HabitStats) {
    let noun = if stats.total == 1 { "habit" } else { "habits" };
    let summary = format!(
        "{} of {} {} completed ({}%)",
        stats.completed, stats.total, noun, stats.percent
    );
    println!();
    if stats.total > 0 && stats.completed == stats.total {
        println!("{}", summary.green());
    } else {
        println!("{}", summary);
    }
}

pub(super) fn print_config(config: &HabitzConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(habit: &Habit) -> String {
    let time_str = match habit.created_at_utc() {
        Some(created) if habit.created_at > 0 => {
            let elapsed = Utc::now().signed_duration_since(created);
            Formatter::new().convert(elapsed.to_std().unwrap_or_default())
        }
        _ => String::new(),
    };
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
