//! Plain-text views for the CLI

use crate::{
    countdown::Countdown,
    models::{Contest, Language, SubmissionSummary},
    registration::{RegistrationPopup, RegistrationState},
    services::{ContestBoard, ContestCard, ProblemBoard, ProblemWorkspace, SubmissionReport},
    utils::time::{format_local, parse_datetime},
};

pub fn contest_board(board: &ContestBoard) -> String {
    if board.is_empty() {
        return "No contests found".to_string();
    }

    let mut lines = Vec::new();
    for (title, cards) in [
        ("Running", &board.running),
        ("Upcoming", &board.upcoming),
        ("Recent", &board.recent),
    ] {
        if cards.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("{title} contests"));
        lines.extend(cards.iter().map(contest_row));
    }
    lines.join("\n")
}

fn contest_row(card: &ContestCard) -> String {
    format!(
        "  #{:<5} {:<32} {}",
        card.contest.cid, card.contest.name, card.countdown
    )
}

pub fn contest(contest: &Contest, countdown: &Countdown) -> String {
    let mut lines = vec![
        format!("{} (#{})", contest.name, contest.cid),
        format!("Starts: {}", format_local(contest.start_time)),
        format!("Ends:   {}", format_local(contest.end_time)),
        countdown.to_string(),
    ];

    if !contest.authors.is_empty() {
        lines.push(format!("Authors: {}", contest.author_names()));
    }
    if let Some(description) = contest.description.as_deref().filter(|d| !d.is_empty()) {
        lines.push(String::new());
        lines.push(description.to_string());
    }
    if !contest.problems.is_empty() {
        lines.push(String::new());
        lines.push("Problems".to_string());
        lines.extend(
            contest
                .problems
                .iter()
                .map(|p| format!("  #{:<5} {}", p.problem_id, p.problem_name)),
        );
    }
    lines.join("\n")
}

pub fn problem_board(board: &ProblemBoard) -> String {
    let mut lines: Vec<String> = board
        .problems
        .iter()
        .map(|p| match p.problem_score {
            Some(score) => format!("#{:<5} {:<40} {score}", p.problem_id, p.problem_name),
            None => format!("#{:<5} {}", p.problem_id, p.problem_name),
        })
        .collect();

    if lines.is_empty() {
        lines.push("No problems found".to_string());
    }

    let page = &board.pagination;
    lines.push(String::new());
    lines.push(format!(
        "Page {} of {} ({} problems)",
        page.page,
        page.total_pages(),
        page.total_records
    ));
    lines.join("\n")
}

pub fn problem(workspace: &ProblemWorkspace) -> String {
    let problem = &workspace.problem;
    let mut lines = vec![format!("{} (#{})", problem.name, problem.pid)];
    if let Some(score) = problem.score {
        lines.push(format!("Score: {score}"));
    }

    for (heading, body) in [
        ("Statement", problem.statement()),
        ("Constraints", problem.constraints.clone()),
        ("Input", problem.input_format.clone()),
        ("Output", problem.output_format.clone()),
        ("Sample input", problem.sample_input.clone()),
        ("Sample output", problem.sample_output.clone()),
        ("Explanation", problem.explanation.clone()),
    ] {
        if body.trim().is_empty() {
            continue;
        }
        lines.push(String::new());
        lines.push(heading.to_string());
        lines.push(body);
    }

    if !workspace.languages.is_empty() {
        lines.push(String::new());
        lines.push(languages(&workspace.languages));
    }
    lines.join("\n")
}

pub fn languages(languages: &[Language]) -> String {
    let names: Vec<&str> = languages.iter().map(|l| l.language.as_str()).collect();
    format!("Languages: {}", names.join(", "))
}

pub fn submissions(rows: &[SubmissionSummary]) -> String {
    if rows.is_empty() {
        return "No submissions yet".to_string();
    }

    rows.iter()
        .map(|s| {
            format!(
                "#{:<6} {:<32} {:<12} {}",
                s.submission_id, s.problem_name, s.language, s.submission_status_label
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn submission_report(report: &SubmissionReport) -> String {
    let submission = &report.submission;
    let submitted_at = parse_datetime(&submission.submitted_at)
        .map(format_local)
        .unwrap_or_else(|| submission.submitted_at.clone());

    let mut lines = vec![
        format!(
            "Submission #{} for {} (#{})",
            submission.sid, submission.problem_name, submission.problem_id
        ),
        format!("By {} at {}", submission.username, submitted_at),
        format!("Language: {}", submission.language),
        format!("Status: {}", submission.submission_status),
    ];

    match &report.aggregate {
        None => lines.push("Judging in progress".to_string()),
        Some(aggregate) if aggregate.is_empty() => lines.push("No tests were run".to_string()),
        Some(aggregate) => {
            lines.push(format!("Tests ({}):", aggregate.total()));
            lines.extend(
                aggregate
                    .iter()
                    .map(|(status, count)| format!("  {status}: {count}")),
            );
        }
    }

    if !submission.code.is_empty() {
        lines.push(String::new());
        lines.push(submission.code.clone());
    }
    lines.join("\n")
}

pub fn registration(popup: &RegistrationPopup) -> String {
    match popup.state() {
        RegistrationState::Closed => "Registration closed".to_string(),
        RegistrationState::OpenUnconfirmed => {
            "Please agree to the contest terms before registering".to_string()
        }
        RegistrationState::OpenConfirmed => "Ready to register".to_string(),
        RegistrationState::Submitting => "Registering...".to_string(),
        RegistrationState::Registered(message) | RegistrationState::Failed(message) => {
            message.clone()
        }
    }
}
