//! Interactive swipe session

use anyhow::{Context, Result};
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};

use vibes::{NewMessage, SwipeDecision, SwipeKind, Vibe};

use crate::render;
use crate::CliStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Swipe(SwipeKind),
    Matches,
    Bingo,
    ResetLikes,
    PickVibe,
    Quit,
}

impl MenuAction {
    fn label(&self) -> &'static str {
        match self {
            MenuAction::Swipe(SwipeKind::Like) => "❤️  Like",
            MenuAction::Swipe(SwipeKind::Pass) => "✖  Pass",
            MenuAction::Swipe(SwipeKind::Boots) => "👠 Boots (superlike)",
            MenuAction::Swipe(SwipeKind::Wig) => "💇 Wig (superlike)",
            MenuAction::Matches => "💬 Matches & chat",
            MenuAction::Bingo => "🎯 Likes bingo",
            MenuAction::ResetLikes => "🔄 Reset likes",
            MenuAction::PickVibe => "✨ Change my vibe",
            MenuAction::Quit => "🚪 Quit",
        }
    }
}

fn menu(has_cards: bool) -> Vec<MenuAction> {
    let mut actions = Vec::new();
    if has_cards {
        actions.extend([
            MenuAction::Swipe(SwipeKind::Like),
            MenuAction::Swipe(SwipeKind::Pass),
            MenuAction::Swipe(SwipeKind::Boots),
            MenuAction::Swipe(SwipeKind::Wig),
        ]);
    }
    actions.extend([
        MenuAction::Matches,
        MenuAction::Bingo,
        MenuAction::ResetLikes,
        MenuAction::PickVibe,
        MenuAction::Quit,
    ]);
    actions
}

/// Run the session loop until the user quits
pub fn run(store: &mut CliStore) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!(
        "{} {}",
        "VIBES".magenta().bold(),
        "The Ultimate Trash Pop Fantasy Dating App 🦄💅✨".dimmed()
    );

    loop {
        let total = store.profiles().len();
        match store.current_profile() {
            Some(profile) => render::print_card(profile, store.cursor(), total),
            None => {
                println!();
                println!("{}", "No profiles available".yellow());
                println!("{}", "Check back later for new people to meet!".dimmed());
            }
        }
        if let Some(next) = store.upcoming_profile() {
            if total > 1 {
                println!("  {} {}", "Up next:".dimmed(), next.name.dimmed());
            }
        }

        let actions = menu(total > 0);
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let choice = Select::with_theme(&theme)
            .with_prompt(format!("Vibe: {}", render::vibe_label(store.current_vibe())))
            .items(&labels)
            .default(0)
            .interact()
            .context("Failed to read menu choice")?;

        match actions[choice] {
            MenuAction::Swipe(kind) => swipe(store, kind, &theme)?,
            MenuAction::Matches => open_matches(store, &theme)?,
            MenuAction::Bingo => render::print_bingo_board(&store.bingo_progress()),
            MenuAction::ResetLikes => {
                store.reset_like_counters();
                println!("{} Likes reset", "✓".green());
            }
            MenuAction::PickVibe => pick_vibe(store, &theme)?,
            MenuAction::Quit => break,
        }
    }

    println!("Bye, gorgeous 💋");
    Ok(())
}

fn swipe(store: &mut CliStore, kind: SwipeKind, theme: &ColorfulTheme) -> Result<()> {
    let Some(profile) = store.current_profile() else {
        return Ok(());
    };
    let decision = SwipeDecision::new(kind, profile.id.clone());
    let outcome = store.record_swipe(&decision)?;

    let matched = outcome
        .match_id
        .as_deref()
        .and_then(|id| store.find_match(id));
    render::print_outcome(&outcome, matched);

    if store.bingo_reward_pending() {
        println!();
        println!("{}", "🎉 Bingo! You've liked every vibe".green().bold());
        let claim = Confirm::with_theme(theme)
            .with_prompt("Claim your bingo badge?")
            .default(true)
            .interact()
            .context("Failed to read confirmation")?;
        if claim && store.unlock_bingo_badge() {
            println!("🏆 {}", "Badge unlocked".green());
        }
    }

    Ok(())
}

fn open_matches(store: &mut CliStore, theme: &ColorfulTheme) -> Result<()> {
    render::print_match_list(store.matches());
    if store.matches().is_empty() {
        return Ok(());
    }

    let mut labels: Vec<String> = store
        .matches()
        .iter()
        .map(|m| format!("{} {}", m.profile.vibe.emoji(), m.profile.name))
        .collect();
    labels.push("Back".to_string());

    let choice = Select::with_theme(theme)
        .with_prompt("Open chat")
        .items(&labels)
        .default(0)
        .interact()
        .context("Failed to read match choice")?;

    let Some(match_id) = store.matches().get(choice).map(|m| m.id.clone()) else {
        return Ok(());
    };
    chat(store, &match_id, theme)
}

fn chat(store: &mut CliStore, match_id: &str, theme: &ColorfulTheme) -> Result<()> {
    let own_id = store.current_user().id.clone();

    loop {
        if let Some(m) = store.find_match(match_id) {
            render::print_conversation(m, &own_id);
        }

        let text: String = Input::with_theme(theme)
            .with_prompt("Message (empty to go back, :emoji to react)")
            .allow_empty(true)
            .interact_text()
            .context("Failed to read message")?;
        let text = text.trim();
        if text.is_empty() {
            return Ok(());
        }

        let message = match text.strip_prefix(':') {
            Some(reaction) if !reaction.is_empty() => NewMessage::reaction(&own_id, reaction),
            _ => NewMessage::text(&own_id, text),
        };
        store.send_message(match_id, message)?;
    }
}

fn pick_vibe(store: &mut CliStore, theme: &ColorfulTheme) -> Result<()> {
    let labels: Vec<String> = Vibe::ALL
        .iter()
        .map(|v| format!("{}  {}", render::vibe_label(*v), v.tagline().dimmed()))
        .collect();
    let current = Vibe::ALL
        .iter()
        .position(|v| *v == store.current_vibe())
        .unwrap_or(0);

    let choice = Select::with_theme(theme)
        .with_prompt("Pick your vibe")
        .items(&labels)
        .default(current)
        .interact()
        .context("Failed to read vibe choice")?;

    store.set_current_vibe(Vibe::ALL[choice]);
    Ok(())
}
