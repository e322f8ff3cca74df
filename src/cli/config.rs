use crate::error::Result;
use crate::settings::{load_settings, save_settings};

pub fn run(user: Option<&str>, refdata: Option<&str>) -> Result<()> {
    let mut settings = load_settings();

    if user.is_none() && refdata.is_none() {
        println!(
            "User:    {}",
            if settings.user_name.is_empty() { "(not set)" } else { &settings.user_name }
        );
        println!(
            "Refdata: {}",
            settings.refdata_path.as_deref().unwrap_or("(built-in)")
        );
        return Ok(());
    }

    if let Some(name) = user {
        settings.user_name = name.to_string();
    }
    if let Some(path) = refdata {
        settings.refdata_path = Some(path.to_string());
    }
    save_settings(&settings)?;
    println!("Settings saved.");
    Ok(())
}
