//! Terminal rendering for store state

use colored::Colorize;

use vibes::{BingoProgress, Match, MessageKind, Profile, SwipeKind, SwipeOutcome, Vibe};

pub fn vibe_label(vibe: Vibe) -> String {
    format!("{} {}", vibe.emoji(), vibe.display_name())
}

pub fn print_card(profile: &Profile, position: usize, total: usize) {
    println!();
    println!(
        "{} {}, {}  {}",
        format!("[{}/{}]", position + 1, total).dimmed(),
        profile.name.bold(),
        profile.age,
        vibe_label(profile.vibe).magenta()
    );
    if let Some(distance) = profile.distance {
        println!("  {}", format!("{} km away", distance).dimmed());
    }
    if !profile.bio.is_empty() {
        println!("  {}", profile.bio);
    }

    let personality = &profile.personality;
    if !personality.style.is_empty() {
        println!("  {} {}", "Style:".cyan(), personality.style);
    }
    if !personality.catchphrase.is_empty() {
        println!("  {} \"{}\"", "Catchphrase:".cyan(), personality.catchphrase);
    }
    if !personality.interests.is_empty() {
        println!("  {} {}", "Into:".cyan(), personality.interests.join(", "));
    }
    if !personality.signature_move.is_empty() {
        println!("  {} {}", "Signature move:".cyan(), personality.signature_move);
    }
}

pub fn print_outcome(outcome: &SwipeOutcome, matched: Option<&Match>) {
    if outcome.kind.is_superlike() {
        let icon = match outcome.kind {
            SwipeKind::Boots => "👠",
            _ => "💇‍♀️",
        };
        println!("{} {}", icon, "Superlike sent!".yellow());
    }

    if let Some(m) = matched {
        println!(
            "{} You and {} liked each other",
            "💘 It's a match!".green().bold(),
            m.profile.name.bold()
        );
    }
}

pub fn print_bingo_board(progress: &BingoProgress) {
    println!();
    println!("{} ({})", "Likes Bingo".bold(), progress.rule.to_string().dimmed());
    for cell in &progress.cells {
        let mark = if cell.complete { "✅" } else { "⬜" };
        println!(
            "  {} {:<12} given {:>3}  received {:>3}",
            mark,
            vibe_label(cell.vibe),
            cell.given,
            cell.received
        );
    }

    if progress.bingo {
        println!("{}", "Bingo complete!".green().bold());
    } else {
        println!(
            "{}",
            format!("{} vibes left to complete the bingo", progress.remaining).yellow()
        );
    }
    if progress.badge_unlocked {
        println!("🏆 {}", "Bingo badge unlocked".green());
    }
}

pub fn print_match_list(matches: &[Match]) {
    if matches.is_empty() {
        println!("No matches yet. Keep swiping!");
        return;
    }

    println!("{}", "Matches:".bold());
    for m in matches {
        let preview = m
            .last_message()
            .map(|msg| msg.content.clone())
            .unwrap_or_else(|| "Say hi 👋".to_string());
        println!(
            "  {} {} {}",
            m.profile.name.cyan(),
            m.profile.vibe.emoji(),
            preview.dimmed()
        );
    }
}

pub fn print_conversation(m: &Match, own_id: &str) {
    println!();
    println!("{} {}", "Chat with".dimmed(), m.profile.name.bold());
    if m.conversation.is_empty() {
        println!("  {}", "No messages yet".dimmed());
    }
    for message in &m.conversation {
        let time = message.timestamp.format("%H:%M").to_string();
        let body = match message.kind {
            MessageKind::Reaction => message
                .reaction
                .clone()
                .unwrap_or_else(|| message.content.clone()),
            MessageKind::Voice => format!("🎤 {}", message.content),
            MessageKind::Gif => format!("GIF {}", message.content),
            MessageKind::Text => message.content.clone(),
        };
        if message.sender_id == own_id {
            println!("  {} {} {}", time.dimmed(), "you:".green(), body);
        } else {
            println!("  {} {} {}", time.dimmed(), format!("{}:", m.profile.name).cyan(), body);
        }
    }
}
