use chrono::{Local, NaiveDate};
use colored::{ColoredString, Colorize};
use curio::api::{CmdMessage, MessageLevel};
use curio::catalog::{currency_symbol, RoomType};
use curio::config::{CurioConfig, Theme};
use curio::facets::FacetOption;
use curio::model::Item;
use curio::validation::WarningItem;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const INDEX_WIDTH: usize = 5;
const ARTIST_WIDTH: usize = 24;
const PRICE_WIDTH: usize = 14;
const AGE_WIDTH: usize = 16;

/// Accent colors per theme. `System` sticks to the terminal's own palette.
#[derive(Debug, Clone, Copy)]
pub(super) struct Palette {
    theme: Theme,
}

impl Palette {
    pub(super) fn new(config: &CurioConfig) -> Self {
        Self {
            theme: config.theme,
        }
    }

    fn accent(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Dark => s.bright_cyan(),
            Theme::Light => s.blue(),
            Theme::System => s.cyan(),
        }
    }

    fn caution(&self, s: &str) -> ColoredString {
        match self.theme {
            Theme::Dark => s.bright_yellow(),
            Theme::Light | Theme::System => s.yellow(),
        }
    }
}

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

pub(super) fn print_items(items: &[Item], palette: Palette) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    for (i, item) in items.iter().enumerate() {
        let idx = format!("{:>width$}", format!("{}.", i + 1), width = INDEX_WIDTH - 1);
        let artist = pad_to_width(&truncate_to_width(&item.artist, ARTIST_WIDTH), ARTIST_WIDTH);
        let price = format!("{:>width$}", format_price(item), width = PRICE_WIDTH);
        let age = format!("{:>width$}", format_age(&item.acquisition_date), width = AGE_WIDTH);

        let fixed = INDEX_WIDTH + ARTIST_WIDTH + PRICE_WIDTH + AGE_WIDTH + 3;
        let available = LINE_WIDTH.saturating_sub(fixed);
        let title = pad_to_width(&truncate_to_width(&item.title, available), available);

        println!(
            "{} {} {} {} {}",
            palette.accent(&idx),
            title.bold(),
            artist.dimmed(),
            price,
            age.dimmed()
        );
    }
}

pub(super) fn print_warnings(warnings: &[WarningItem], palette: Palette) {
    for warning in warnings {
        let title = if warning.item.title.trim().is_empty() {
            format!("(untitled {})", warning.item.id)
        } else {
            warning.item.title.clone()
        };
        println!(
            "{} {}  {}",
            palette.caution("⚠"),
            title.bold(),
            warning.message().dimmed()
        );
    }
}

pub(super) fn print_options(options: &[FacetOption], palette: Palette) {
    for option in options {
        if option.display_name == option.id {
            println!("{}", palette.accent(&option.id));
        } else {
            println!(
                "{}  {}",
                palette.accent(&option.id),
                option.display_name.dimmed()
            );
        }
    }
}

pub(super) fn print_rooms(rooms: &[RoomType], palette: Palette) {
    for room in rooms {
        match &room.description {
            Some(desc) => println!(
                "{}  {}  {}",
                palette.accent(&room.id),
                room.name,
                desc.dimmed()
            ),
            None => println!("{}  {}", palette.accent(&room.id), room.name),
        }
    }
}

pub(super) fn print_config(config: &CurioConfig) {
    for key in curio::config::CONFIG_KEYS {
        let value = config.get(key).unwrap_or_default();
        println!("{} = {}", key, value);
    }
}

/// One-shot health line shown when the `show-api-health` preference is on.
pub(super) fn print_health(reachable: Result<usize, String>) {
    let checked_at = Local::now().format("%H:%M:%S");
    match reachable {
        Ok(count) => println!(
            "{} {}",
            "●".green(),
            format!("items source ok ({} items, checked {})", count, checked_at).dimmed()
        ),
        Err(e) => println!(
            "{} {}",
            "●".red(),
            format!("items source unavailable: {} (checked {})", e, checked_at).dimmed()
        ),
    }
}

fn format_price(item: &Item) -> String {
    if item.price.is_empty() {
        return String::new();
    }
    match currency_symbol(&item.currency) {
        Some(symbol) => format!("{} {}", symbol, item.price),
        None if item.currency.is_empty() => item.price.clone(),
        None => format!("{} {}", item.currency, item.price),
    }
}

/// "3 years ago" for ISO dates, the raw text otherwise.
fn format_age(date: &str) -> String {
    let date = date.trim();
    let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") else {
        return truncate_to_width(date, AGE_WIDTH);
    };
    let today = Local::now().date_naive();
    match today.signed_duration_since(parsed).to_std() {
        Ok(elapsed) => Formatter::new().convert(elapsed),
        Err(_) => date.to_string(),
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
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_with_ellipsis() {
        assert_eq!(truncate_to_width("Water Lilies", 20), "Water Lilies");
        assert_eq!(truncate_to_width("Water Lilies", 6), "Water…");
    }

    #[test]
    fn truncation_respects_wide_chars() {
        let s = truncate_to_width("北斎の浮世絵", 6);
        assert!(s.width() <= 6);
        assert!(s.ends_with('…'));
    }

    #[test]
    fn pads_to_display_width() {
        assert_eq!(pad_to_width("ab", 4), "ab  ");
        assert_eq!(pad_to_width("abcdef", 4), "abcdef");
    }

    #[test]
    fn price_uses_currency_symbol() {
        let mut item = Item::new("A");
        item.price = "40".into();
        assert_eq!(format_price(&item), "40");
        item.currency = "EUR".into();
        assert_eq!(format_price(&item), "€ 40");
        item.currency = "XYZ".into();
        assert_eq!(format_price(&item), "XYZ 40");
    }

    #[test]
    fn age_falls_back_to_raw_text() {
        assert_eq!(format_age("spring 1999"), "spring 1999");
        assert!(format_age("2001-02-03").ends_with("ago"));
    }
}
