use crate::error::Result;
use crate::settings::{load_settings, save_settings};

pub fn run(currency: Option<String>, recent: Option<usize>, api_url: Option<String>) -> Result<()> {
    let mut settings = load_settings();

    if let Some(symbol) = currency {
        settings.currency_symbol = symbol;
    }
    if let Some(limit) = recent {
        settings.recent_limit = limit;
    }
    if let Some(url) = api_url {
        settings.api_url = url;
    }

    let path = save_settings(&settings)?;
    println!("Wrote settings to {}", path.display());
    Ok(())
}
