//! `prefs` sub-commands: stored view mode and split ratio.

use clap::Subcommand;
use crmcal_core::{
    AppConfig, CalendarPreferences, ContainerBounds, FilePreferences, PreferenceStore,
    SplitBounds, SplitLayout, ViewMode,
};

#[derive(Debug, Subcommand)]
pub enum PrefsCommands {
    /// Print the stored view mode and split ratio
    Show,
    /// Store the calendar view mode (month, week or list)
    SetView { mode: ViewMode },
    /// Store the split ratio, clamped to the configured bounds
    SetSplit {
        #[arg(allow_negative_numbers = true)]
        ratio: f64,
    },
    /// Replay a divider drag across a container and store where it ends
    Drag {
        /// Left edge of the container in pointer coordinates
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        left: f64,

        /// Container width in pointer coordinates
        #[arg(long)]
        width: f64,

        /// Pointer positions, in order
        #[arg(long = "to", required = true, num_args = 1.., allow_negative_numbers = true)]
        pointer: Vec<f64>,
    },
}

/// Split layout seeded from stored preferences, or the midpoint of `bounds`.
pub(crate) fn stored_layout<S: PreferenceStore>(
    prefs: &CalendarPreferences<S>,
    bounds: SplitBounds,
) -> SplitLayout {
    let initial = prefs
        .split_ratio(bounds)
        .unwrap_or((bounds.min() + bounds.max()) / 2.0);
    SplitLayout::new(bounds, initial)
}

/// # Errors
///
/// Returns an error if the preferences file cannot be read or written.
pub(crate) fn run(config: &AppConfig, command: PrefsCommands) -> anyhow::Result<()> {
    let store = FilePreferences::open(config.preferences_path.clone())?;
    let mut prefs = CalendarPreferences::new(store);
    let message = apply(&mut prefs, config.split_bounds, command)?;
    println!("{message}");
    Ok(())
}

pub(crate) fn apply<S: PreferenceStore>(
    prefs: &mut CalendarPreferences<S>,
    bounds: SplitBounds,
    command: PrefsCommands,
) -> anyhow::Result<String> {
    match command {
        PrefsCommands::Show => {
            let mode = prefs
                .view_mode()
                .map_or_else(|| format!("{} (default)", ViewMode::default()), |m| m.to_string());
            let split = stored_layout(prefs, bounds);
            Ok(format!(
                "view mode: {mode}\nsplit: {:.1}% (bounds {:.0}-{:.0})",
                split.percent(),
                bounds.min(),
                bounds.max()
            ))
        }
        PrefsCommands::SetView { mode } => {
            prefs.set_view_mode(mode)?;
            tracing::info!(%mode, "stored view mode");
            Ok(format!("view mode set to {mode}"))
        }
        PrefsCommands::SetSplit { ratio } => {
            let stored = prefs.set_split_ratio(ratio, bounds)?;
            tracing::info!(requested = ratio, stored, "stored split ratio");
            Ok(format!("split set to {stored:.1}%"))
        }
        PrefsCommands::Drag {
            left,
            width,
            pointer,
        } => {
            let mut layout = stored_layout(prefs, bounds);
            let mut drag = layout.begin_drag(ContainerBounds::new(left, width));
            for x in pointer {
                drag.pointer_moved(x);
            }
            if !drag.has_moved() {
                anyhow::bail!("container width must be positive; nothing was dragged");
            }
            let released = drag.release();
            let stored = prefs.set_split_ratio(released, bounds)?;
            Ok(format!("split dragged to {stored:.1}%"))
        }
    }
}
