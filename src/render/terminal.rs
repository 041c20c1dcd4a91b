//! Terminal frame rendering and cancellation polling
//!
//! Draws the grid once per tick as colored block characters and
//! prints the running report below it. The caller owns raw mode, so
//! every line ends with an explicit carriage return.

use std::io::Write;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::style::{Color as TermColor, Print, ResetColor, SetForegroundColor};
use crossterm::{cursor, queue, terminal};

use crate::core::error::Result;
use crate::render::colors::{cell_color, Color, BACKGROUND};
use crate::simulation::tick::{DaySummary, Simulation};

fn to_term(color: Color) -> TermColor {
    TermColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// Draw the current grid and the day's report.
pub fn draw_frame(out: &mut impl Write, sim: &Simulation, summary: &DaySummary) -> Result<()> {
    queue!(out, cursor::MoveTo(0, 0), terminal::Clear(terminal::ClearType::All))?;

    let side = sim.config().side;
    for y in 0..side {
        for x in 0..side {
            let cell = &sim.cells()[y * side + x];
            let color = cell_color(cell);
            if color == BACKGROUND {
                queue!(out, Print("  "))?;
            } else {
                queue!(out, SetForegroundColor(to_term(color)), Print("\u{2588}\u{2588}"))?;
            }
        }
        queue!(out, ResetColor, Print("\r\n"))?;
    }

    queue!(out, ResetColor)?;
    for line in report_lines(sim, summary) {
        queue!(out, Print(line), Print("\r\n"))?;
    }
    queue!(out, Print("\r\nQ or Esc to quit simulation.\r\n"))?;
    out.flush()?;
    Ok(())
}

/// The running report, one string per line. Separated from drawing so
/// the final (post-raw-mode) summary can reuse it.
pub fn report_lines(sim: &Simulation, summary: &DaySummary) -> Vec<String> {
    let config = sim.config();
    let living = summary.living.max(1) as f64;
    let ever = summary.ever_infected;

    let mut lines = vec![
        format!("Current infected: {} cells", summary.active),
        String::new(),
        format!("Time      : {}/{} days", summary.day, config.days),
        format!(
            "Infected  : {} out of {} ({:.1}%)",
            ever,
            summary.living,
            ever as f64 * 100.0 / living
        ),
        format!(
            "Died      : {} out of {} ({:.1}%)",
            summary.dead,
            summary.living,
            summary.dead as f64 * 100.0 / living
        ),
        format!(
            "Recovered : {} out of {} infected ({:.1}%)",
            summary.recovered,
            ever,
            summary.recovered as f64 * 100.0 / ever.max(1) as f64
        ),
        String::new(),
        "PARAMETERS".to_string(),
        format!("Density      : {:.0}% populated", config.density * 100.0),
        format!("Infection    : {:.1}%", config.rate * 100.0),
        format!("Re-infection : {:.1}%", (1.0 - config.immunity) * 100.0),
        format!("Incubation   : {} days", config.incubation),
        format!("Infectious   : {} days", config.duration),
        format!("Fatality     : {:.1}% fatal", config.fatality * 100.0),
    ];

    if config.quarantine_introduced < config.days {
        lines.push(String::new());
        lines.push("QUARANTINE".to_string());
        lines.push(format!(
            "Introduced    : day {}",
            config.quarantine_introduced
        ));
        lines.push(format!(
            "Effectiveness : {:.1}% found and quarantined",
            config.quarantine_effectiveness * 100.0
        ));
    }
    if config.med_introduced < config.days {
        lines.push(String::new());
        lines.push("MEDICINE".to_string());
        lines.push(format!("Introduced    : day {}", config.med_introduced));
        lines.push(format!(
            "Effectiveness : {:.1}% recovery",
            config.med_effectiveness * 100.0
        ));
    }

    lines
}

/// Non-blocking check for a cancellation keypress (Q, Esc or Ctrl-C).
/// Polled once per tick boundary; a run is never interrupted
/// mid-sweep.
pub fn poll_cancel() -> Result<bool> {
    while event::poll(Duration::from_millis(0))? {
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Esc => return Ok(true),
                KeyCode::Char('q') => return Ok(true),
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true)
                }
                _ => {}
            }
        }
    }
    Ok(false)
}
