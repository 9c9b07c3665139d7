//! Implements InputPort. Inquire-based interactive prompts.
//!
//! Main menu: browse/search cities page by page, favorites, contact moods, refresh.

use crate::adapters::ui::progress::spinner;
use crate::domain::paging::{page, total_pages};
use crate::domain::sentiment::{MoodStyle, TextTone};
use crate::domain::{CitySentiment, ContactRow, DomainError};
use crate::ports::InputPort;
use crate::usecases::{CitySentimentDirectory, ContactsLoader, FavoritesService};
use async_trait::async_trait;
use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{Select, Text};
use std::sync::Arc;

const MENU_BROWSE: &str = "Browse cities";
const MENU_FAVORITES: &str = "Favorites";
const MENU_CONTACTS: &str = "Contacts by city mood";
const MENU_REFRESH: &str = "Refresh data";
const MENU_QUIT: &str = "Quit";

const NAV_NEXT: &str = "→ Next page";
const NAV_PREV: &str = "← Previous page";
const NAV_BACK: &str = "↩ Back";

/// Applies the prompt theme globally.
pub fn apply_theme() {
    let config = RenderConfig::default_colored()
        .with_prompt_prefix(Styled::new("☀").with_fg(Color::LightYellow))
        .with_highlighted_option_prefix(Styled::new("›").with_fg(Color::LightMagenta));
    inquire::set_global_render_config(config);
}

/// Maps prompt errors: Esc/Ctrl-C become `None` ("go back"), others are UI errors.
fn prompt_result<T>(res: Result<T, InquireError>) -> Result<Option<T>, DomainError> {
    match res {
        Ok(v) => Ok(Some(v)),
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

fn intensity_bar(intensity: f64) -> String {
    let filled = (intensity.clamp(0.0, 1.0) * 10.0).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

fn city_line(city: &CitySentiment, favorite: bool) -> String {
    format!(
        "{} {} {:<18} {:<10} {}",
        if favorite { "★" } else { " " },
        city.emoji,
        city.city,
        city.label,
        intensity_bar(city.intensity)
    )
}

fn city_detail(city: &CitySentiment) -> String {
    let style = MoodStyle::for_label(&city.label);
    let mut s = String::new();
    s.push_str(&format!("\n{} {} feels {}\n", city.emoji, city.city, city.label));
    s.push_str(&format!(
        "intensity {} ({:.0}%)  palette: {}{}\n",
        intensity_bar(city.intensity),
        city.intensity * 100.0,
        style.palette,
        if style.tone == TextTone::Dark { " (dark text)" } else { "" }
    ));
    if !city.what_people_thinking.is_empty() {
        s.push_str("\nWhat people are thinking:\n");
        for item in &city.what_people_thinking {
            s.push_str(&format!("  • {}\n", item));
        }
    }
    if !city.what_people_care.is_empty() {
        s.push_str("\nWhat people care about:\n");
        s.push_str(&format!("  {}\n", city.what_people_care.join(" · ")));
    }
    s
}

fn contact_line(row: &ContactRow) -> String {
    format!(
        "{:<20} {:<16} {:<15} {} {}",
        row.name, row.phone, row.city, row.emoji, row.mood
    )
}

/// Outcome line for a favorite toggle. Store errors are reported, not propagated.
fn toggle_message(city: &str, result: Result<bool, DomainError>) -> String {
    match result {
        Ok(true) => format!("{} added to favorites.", city),
        Ok(false) => format!("{} removed from favorites.", city),
        Err(e) => format!("Could not update favorites for {} ({}).", city, e),
    }
}

/// Contacts table, empty-state text, or the load error.
fn contacts_report(result: Result<Vec<ContactRow>, DomainError>) -> String {
    let rows = match result {
        Ok(rows) => rows,
        Err(e) => return format!("Could not load contacts ({}). Try again.\n", e),
    };
    if rows.is_empty() {
        return "No contacts with a recognized area code.\n".to_string();
    }
    let mut s = format!("{:<20} {:<16} {:<15} {}\n", "Name", "Phone", "City", "Mood");
    for row in &rows {
        s.push_str(&contact_line(row));
        s.push('\n');
    }
    s
}

/// TUI adapter. Inquire prompts.
pub struct TuiInputPort {
    directory: Arc<CitySentimentDirectory>,
    favorites: Arc<FavoritesService>,
    contacts: Arc<ContactsLoader>,
    page_size: usize,
}

impl TuiInputPort {
    pub fn new(
        directory: Arc<CitySentimentDirectory>,
        favorites: Arc<FavoritesService>,
        contacts: Arc<ContactsLoader>,
        page_size: usize,
    ) -> Self {
        Self {
            directory,
            favorites,
            contacts,
            page_size,
        }
    }

    async fn refresh(&self) {
        let pb = spinner("Fetching city moods...");
        let result = self.directory.refresh().await;
        pb.finish_and_clear();
        match result {
            Ok(n) => println!("Loaded {} cities.", n),
            Err(e) => println!("Could not load city moods ({}). Choose \"{}\" to retry.", e, MENU_REFRESH),
        }
    }

    async fn browse(&self) -> Result<(), DomainError> {
        let Some(query) = prompt_result(
            Text::new("Search city (empty for all):").prompt(),
        )?
        else {
            return Ok(());
        };
        let filtered = self.directory.filter(query.trim()).await;
        if filtered.is_empty() {
            println!("No cities match \"{}\".", query.trim());
            return Ok(());
        }

        let pages = total_pages(filtered.len(), self.page_size);
        let mut current = 0usize;
        loop {
            let items = page(&filtered, self.page_size, current);
            let mut options = Vec::with_capacity(items.len() + 3);
            for city in &items {
                options.push(city_line(city, self.favorites.contains(&city.city).await));
            }
            if current + 1 < pages {
                options.push(NAV_NEXT.to_string());
            }
            if current > 0 {
                options.push(NAV_PREV.to_string());
            }
            options.push(NAV_BACK.to_string());

            let title = format!("City moods ({} of {})", current + 1, pages);
            let Some(choice) = prompt_result(Select::new(&title, options.clone()).prompt())? else {
                return Ok(());
            };
            match choice.as_str() {
                NAV_NEXT => current = (current + 1).min(pages - 1),
                NAV_PREV => current = current.saturating_sub(1),
                NAV_BACK => return Ok(()),
                _ => {
                    if let Some(idx) = options.iter().position(|o| *o == choice) {
                        if let Some(city) = items.get(idx) {
                            self.show_city(city).await?;
                        }
                    }
                }
            }
        }
    }

    async fn show_city(&self, city: &CitySentiment) -> Result<(), DomainError> {
        println!("{}", city_detail(city));
        let is_fav = self.favorites.contains(&city.city).await;
        let toggle = if is_fav {
            "Remove from favorites"
        } else {
            "Add to favorites"
        };
        let Some(choice) = prompt_result(Select::new("", vec![toggle, NAV_BACK]).prompt())? else {
            return Ok(());
        };
        if choice == toggle {
            let result = self.favorites.toggle(&city.city).await;
            println!("{}", toggle_message(&city.city, result));
        }
        Ok(())
    }

    async fn show_favorites(&self) -> Result<(), DomainError> {
        let view = self.favorites.favorites_view(&self.directory).await;
        if view.is_empty() {
            println!("No favorites yet. Pick a city under \"{}\".", MENU_BROWSE);
            return Ok(());
        }
        let mut options: Vec<String> = view.iter().map(|c| city_line(c, true)).collect();
        options.push(NAV_BACK.to_string());
        let Some(choice) = prompt_result(Select::new("Favorites", options.clone()).prompt())? else {
            return Ok(());
        };
        if let Some(idx) = options.iter().position(|o| *o == choice) {
            if let Some(city) = view.get(idx) {
                self.show_city(city).await?;
            }
        }
        Ok(())
    }

    async fn show_contacts(&self) {
        let pb = spinner("Matching contacts to city moods...");
        let rows = self.contacts.load_and_wait().await;
        pb.finish_and_clear();
        print!("{}", contacts_report(rows));
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        self.refresh().await;
        if let Some(ts) = self.directory.last_updated().await {
            println!("Last updated {}", ts.format("%Y-%m-%d %H:%M UTC"));
        }

        loop {
            let menu = vec![MENU_BROWSE, MENU_FAVORITES, MENU_CONTACTS, MENU_REFRESH, MENU_QUIT];
            let Some(choice) = prompt_result(Select::new("What next?", menu).prompt())? else {
                return Ok(());
            };
            match choice {
                MENU_BROWSE => self.browse().await?,
                MENU_FAVORITES => self.show_favorites().await?,
                MENU_CONTACTS => self.show_contacts().await,
                MENU_REFRESH => self.refresh().await,
                _ => return Ok(()),
            }
        }
    }
}
