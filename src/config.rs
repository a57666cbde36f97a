//! Travel settings: modes of transport, the trip budget, and the console
//! prompt that collects them.

use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::error::{PlannerError, Result};

/// Mode of transport, each with a fixed average speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelMode {
    Walking,
    Bicycle,
    Car,
}

impl TravelMode {
    pub const ALL: [TravelMode; 3] = [TravelMode::Walking, TravelMode::Bicycle, TravelMode::Car];

    /// Average speed in km/h.
    pub fn speed_kmh(self) -> f64 {
        match self {
            TravelMode::Walking => 3.0,
            TravelMode::Bicycle => 12.0,
            TravelMode::Car => 90.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TravelMode::Walking => "On foot",
            TravelMode::Bicycle => "By bicycle",
            TravelMode::Car => "By car",
        }
    }

    /// Menu number shown by the prompt.
    pub fn menu_key(self) -> &'static str {
        match self {
            TravelMode::Walking => "1",
            TravelMode::Bicycle => "2",
            TravelMode::Car => "3",
        }
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "walk" | "walking" | "foot" => Ok(TravelMode::Walking),
            "2" | "bike" | "bicycle" => Ok(TravelMode::Bicycle),
            "3" | "car" | "drive" => Ok(TravelMode::Car),
            other => Err(format!(
                "Invalid travel mode: {}. Use 'walk', 'bike' or 'car'",
                other
            )),
        }
    }
}

/// Travel speed and the maximum time the traveler is willing to spend moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripBudget {
    speed_kmh: f64,
    max_time_hours: f64,
}

impl TripBudget {
    /// Both values must be finite and strictly positive.
    pub fn new(speed_kmh: f64, max_time_hours: f64) -> Result<Self> {
        if !speed_kmh.is_finite() || speed_kmh <= 0.0 {
            return Err(PlannerError::InvalidBudget(format!(
                "speed must be a positive number, got {}",
                speed_kmh
            )));
        }
        if !max_time_hours.is_finite() || max_time_hours <= 0.0 {
            return Err(PlannerError::InvalidBudget(format!(
                "time budget must be a positive number, got {}",
                max_time_hours
            )));
        }
        Ok(Self {
            speed_kmh,
            max_time_hours,
        })
    }

    pub fn for_mode(mode: TravelMode, max_time_hours: f64) -> Result<Self> {
        Self::new(mode.speed_kmh(), max_time_hours)
    }

    pub fn speed_kmh(&self) -> f64 {
        self.speed_kmh
    }

    pub fn max_time_hours(&self) -> f64 {
        self.max_time_hours
    }

    /// Hours needed to cover `km` at this budget's speed.
    pub fn travel_hours(&self, km: f64) -> f64 {
        km / self.speed_kmh
    }
}

/// Ask for a travel mode and a time budget until both are valid.
///
/// Returns an `Io` error if the input ends before a valid answer is read.
pub fn prompt_budget<R: BufRead, W: Write>(input: R, output: W) -> Result<TripBudget> {
    resolve_budget(None, None, input, output)
}

/// Build a budget from values already known, prompting only for the
/// missing ones.
pub fn resolve_budget<R: BufRead, W: Write>(
    mode: Option<TravelMode>,
    hours: Option<f64>,
    mut input: R,
    mut output: W,
) -> Result<TripBudget> {
    let mode = match mode {
        Some(mode) => mode,
        None => prompt_mode(&mut input, &mut output)?,
    };
    let hours = match hours {
        Some(hours) => hours,
        None => prompt_hours(&mut input, &mut output)?,
    };

    tracing::debug!(?mode, hours, "travel settings entered");
    TripBudget::for_mode(mode, hours)
}

/// Show the mode menu and read a choice until it is 1, 2 or 3.
pub fn prompt_mode<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<TravelMode> {
    writeln!(output, "Choose a mode of transport:")?;
    for mode in TravelMode::ALL {
        writeln!(
            output,
            "{} - {} ({} km/h)",
            mode.menu_key(),
            mode.label(),
            mode.speed_kmh()
        )?;
    }

    loop {
        let line = read_answer(input, output, "Enter a number: ")?;
        match line.as_str() {
            "1" | "2" | "3" => return line.parse::<TravelMode>().map_err(PlannerError::InvalidInput),
            _ => writeln!(output, "Invalid choice. Please enter 1, 2 or 3.")?,
        }
    }
}

/// Read a maximum travel time until it is a positive number of hours.
pub fn prompt_hours<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<f64> {
    loop {
        let line = read_answer(input, output, "Enter the maximum travel time in hours: ")?;
        match line.parse::<f64>() {
            Ok(hours) if hours.is_finite() && hours > 0.0 => return Ok(hours),
            Ok(_) => writeln!(output, "Time must be a positive number.")?,
            Err(_) => writeln!(output, "Please enter a number.")?,
        }
    }
}

fn read_answer<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PlannerError::Io(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            "input closed before travel settings were entered",
        )));
    }
    Ok(line.trim().to_string())
}
