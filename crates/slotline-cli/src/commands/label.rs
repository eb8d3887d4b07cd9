use clap::Subcommand;
use slotline_core::conflict::{
    level_text, role_text, status_class, status_text, type_text, user_status_text,
};
use slotline_core::{IntervalKind, Level};

#[derive(Subcommand)]
pub enum LabelAction {
    /// Maintenance level (HARD, SOFT)
    Level { tag: String },
    /// Interval type (ALLOCATION, MAINTENANCE)
    Type { tag: String },
    /// Lifecycle status with its style class
    Status { tag: String },
    /// User role (ADMIN, USER)
    Role { tag: String },
    /// User account status (ACTIVE, DISABLED)
    UserStatus { tag: String },
}

pub fn run(action: LabelAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        LabelAction::Level { tag } => println!("{}", level_text(Some(&Level::from(tag)))),
        LabelAction::Type { tag } => println!("{}", type_text(Some(&IntervalKind::from(tag)))),
        LabelAction::Status { tag } => println!("{}\t{}", status_text(&tag), status_class(&tag)),
        LabelAction::Role { tag } => println!("{}", role_text(Some(tag.as_str()))),
        LabelAction::UserStatus { tag } => println!("{}", user_status_text(Some(tag.as_str()))),
    }
    Ok(())
}
