//! Terminal rendering for schedules.
//!
//! Extension trait adding colored output to clarity-core types using owo_colors.

use clarity_core::deep_link::google_calendar_link;
use clarity_core::{Priority, Schedule, ScheduledTask};
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

impl Render for Priority {
    fn render(&self) -> String {
        let label = self.as_str().to_uppercase();
        match self {
            Priority::High => label.red().bold().to_string(),
            Priority::Medium => label.yellow().bold().to_string(),
            Priority::Low => label.green().bold().to_string(),
        }
    }
}

impl Render for ScheduledTask {
    fn render(&self) -> String {
        let time = format!("{} – {}", self.start.format("%H:%M"), self.end.format("%H:%M"));
        let details = format!("· {} · {} min", self.task.category(), self.duration_minutes());

        let mut card = format!(
            "{}  {}  {} {}",
            time.bold(),
            self.task.priority().render(),
            self.task.display_title().bold(),
            details.dimmed()
        );

        let description = self.task.description.trim();
        if !description.is_empty() {
            for line in description.lines() {
                card.push_str(&format!("\n               {}", line));
            }
        }

        card
    }
}

impl Render for Schedule {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push("📋 Your Plan".bold().to_string());
        if !self.summary.trim().is_empty() {
            lines.push(self.summary.trim().italic().to_string());
        }
        lines.push(stats_line(self).dimmed().to_string());

        let counts = self.priority_counts();
        lines.push(format!(
            "{} {}   {} {}   {} {}",
            counts.high,
            "high".red(),
            counts.medium,
            "medium".yellow(),
            counts.low,
            "low".green()
        ));
        lines.push(String::new());

        for task in &self.tasks {
            lines.push(task.render());
        }

        lines.join("\n")
    }
}

/// e.g. `2 tasks · ~60 min total · Finishes around 09:05`
fn stats_line(schedule: &Schedule) -> String {
    let finish = schedule
        .finishes_at()
        .map(|end| end.format("%H:%M").to_string())
        .unwrap_or_else(|| "—".to_string());

    format!(
        "{} {} · ~{} min total · Finishes around {}",
        schedule.len(),
        pluralize("task", schedule.len()),
        schedule.total_minutes(),
        finish
    )
}

/// One quick-add link per task, labelled with its start time.
pub fn render_links(schedule: &Schedule) -> String {
    schedule
        .tasks
        .iter()
        .map(|task| {
            format!(
                "{} {} · {}\n  {}",
                "+".green(),
                task.start.format("%H:%M"),
                task.task.display_title(),
                google_calendar_link(task).dimmed()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{}s", word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use clarity_core::layout::layout;
    use clarity_core::{Plan, TaskDraft};

    fn schedule(tasks: Vec<TaskDraft>) -> Schedule {
        let anchor = NaiveDate::from_ymd_opt(2026, 3, 20)
            .unwrap()
            .and_hms_opt(8, 0, 0)
            .unwrap();
        layout(
            Plan {
                summary: "Report first".to_string(),
                tasks,
            },
            anchor,
            5,
        )
    }

    #[test]
    fn stats_line_summarizes_schedule() {
        let s = schedule(vec![
            TaskDraft::new("Report").with_duration(45),
            TaskDraft::new("Email").with_duration(15),
        ]);
        assert_eq!(stats_line(&s), "2 tasks · ~60 min total · Finishes around 09:05");
    }

    #[test]
    fn stats_line_singular() {
        let s = schedule(vec![TaskDraft::new("Gym")]);
        assert_eq!(stats_line(&s), "1 task · ~30 min total · Finishes around 08:30");
    }

    #[test]
    fn card_shows_time_title_and_description() {
        let s = schedule(vec![
            TaskDraft::new("Report")
                .with_duration(45)
                .with_category("Work")
                .with_description("For Sarah\nInclude Q3"),
        ]);
        let card = s.tasks[0].render();

        assert!(card.contains("08:00 – 08:45"));
        assert!(card.contains("Report"));
        assert!(card.contains("· Work · 45 min"));
        assert!(card.contains("For Sarah"));
        assert!(card.contains("Include Q3"));
    }

    #[test]
    fn links_are_listed_per_task() {
        let s = schedule(vec![TaskDraft::new("Report"), TaskDraft::new("Buy, milk")]);
        let links = render_links(&s);

        assert!(links.contains("08:00 · Report"));
        assert!(links.contains("08:35 · Buy, milk"));
        assert!(links.contains("text=Buy%2C+milk"));
    }
}
