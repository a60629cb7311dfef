//! The tour itself: an ordered list of sections, each printed under a
//! `=== Title ===` header and followed by a separator.
//!
//! Sections are independent; nothing produced by one is read by another.
//! The one exception to strictly sequential output is
//! [`Section::Asynchronous`], which schedules a deferred callback that writes
//! its line whenever it fires.  [`Tour::wait_pending`] waits for those.

use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::{JoinError, JoinHandle};

use crate::car::car_lines;
use crate::control::{grade_remark, loop_lines, Weather, GRADE, TEMPERATURE};
use crate::direction::direction_lines;
use crate::fetch::{fetch_data, DEFAULT_FETCH_DELAY};
use crate::functions::{closure_lines, function_lines};
use crate::network::error_lines;
use crate::optional::optional_lines;
use crate::point::point_lines;
use crate::values::primitive_lines;

// ── Output sinks ──────────────────────────────────────────────────────────────

/// Where tour lines go.  Shared with deferred callbacks, hence `Send + Sync`.
pub trait Output: Send + Sync {
    fn line(&self, line: &str);
}

/// Writes each line to stdout.  A closed pipe (`tour | head -1`) drops the
/// remaining lines instead of panicking.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl Output for Stdout {
    fn line(&self, line: &str) {
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{line}") {
            if e.kind() != io::ErrorKind::BrokenPipe {
                tracing::warn!(error = %e, "failed to write tour output");
            }
        }
    }
}

/// Collects lines in memory, in the order they were written.
#[derive(Debug, Default, Clone)]
pub struct Transcript {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

impl Output for Transcript {
    fn line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_owned());
    }
}

// ── Section ───────────────────────────────────────────────────────────────────

/// One block of the tour, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
    DataTypes,
    IfStatements,
    Loops,
    SwitchStatements,
    Functions,
    Classes,
    Asynchronous,
    Closures,
    Enums,
    Structs,
    Optionals,
    ErrorHandling,
}

impl Section {
    /// Every section in tour order.
    pub const ALL: &'static [Section] = &[
        Section::DataTypes,
        Section::IfStatements,
        Section::Loops,
        Section::SwitchStatements,
        Section::Functions,
        Section::Classes,
        Section::Asynchronous,
        Section::Closures,
        Section::Enums,
        Section::Structs,
        Section::Optionals,
        Section::ErrorHandling,
    ];

    /// Heading text shown between the `===` markers.
    pub fn title(self) -> &'static str {
        match self {
            Section::DataTypes        => "Data Type Handling",
            Section::IfStatements     => "If Statements",
            Section::Loops            => "Loops",
            Section::SwitchStatements => "Switch Statements",
            Section::Functions        => "Functions",
            Section::Classes          => "Classes",
            Section::Asynchronous     => "Asynchronous Programming",
            Section::Closures         => "Closures",
            Section::Enums            => "Enums",
            Section::Structs          => "Structs",
            Section::Optionals        => "Optionals",
            Section::ErrorHandling    => "Error Handling",
        }
    }

    /// Short name used to pick sections on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Section::DataTypes        => "data",
            Section::IfStatements     => "if",
            Section::Loops            => "loops",
            Section::SwitchStatements => "switch",
            Section::Functions        => "functions",
            Section::Classes          => "classes",
            Section::Asynchronous     => "async",
            Section::Closures         => "closures",
            Section::Enums            => "enums",
            Section::Structs          => "structs",
            Section::Optionals        => "optionals",
            Section::ErrorHandling    => "errors",
        }
    }

    pub fn header(self) -> String {
        format!("=== {} ===", self.title())
    }
}

impl FromStr for Section {
    type Err = String;

    /// Case-insensitive parse from [`Section::name`].
    fn from_str(s: &str) -> Result<Self, String> {
        Section::ALL
            .iter()
            .copied()
            .find(|sec| sec.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown section {s:?}"))
    }
}

// ── Tour ──────────────────────────────────────────────────────────────────────

/// Two blank lines close every section.
const SEPARATOR: [&str; 2] = ["", ""];

/// Runs sections against an [`Output`] and tracks deferred callbacks still
/// in flight.
pub struct Tour {
    out: Arc<dyn Output>,
    fetch_delay: Duration,
    pending: Vec<JoinHandle<()>>,
}

impl Tour {
    pub fn new(out: Arc<dyn Output>) -> Self {
        Self { out, fetch_delay: DEFAULT_FETCH_DELAY, pending: Vec::new() }
    }

    /// Override the artificial delay of the deferred callback.
    pub fn with_fetch_delay(mut self, delay: Duration) -> Self {
        self.fetch_delay = delay;
        self
    }

    /// Run `sections` in tour order, skipping duplicates.
    ///
    /// Must be called from within a tokio runtime if the list contains
    /// [`Section::Asynchronous`].
    pub fn run(&mut self, sections: &[Section]) {
        let mut ordered = sections.to_vec();
        ordered.sort_unstable();
        ordered.dedup();
        for section in ordered {
            self.run_section(section);
        }
    }

    /// Print one section: header, body, separator.
    pub fn run_section(&mut self, section: Section) {
        tracing::debug!(section = section.name(), "running section");
        self.out.line(&section.header());
        for line in self.body(section) {
            self.out.line(&line);
        }
        for line in SEPARATOR {
            self.out.line(line);
        }
    }

    fn body(&mut self, section: Section) -> Vec<String> {
        match section {
            Section::DataTypes        => primitive_lines(),
            Section::IfStatements     => {
                vec![Weather::classify(TEMPERATURE).message().to_owned()]
            }
            Section::Loops            => loop_lines(),
            Section::SwitchStatements => vec![grade_remark(GRADE).to_owned()],
            Section::Functions        => function_lines(),
            Section::Classes          => car_lines(),
            Section::Asynchronous     => {
                // The callback prints later, on its own task.
                let out = Arc::clone(&self.out);
                let handle = fetch_data(self.fetch_delay, move |data| out.line(&data));
                self.pending.push(handle);
                Vec::new()
            }
            Section::Closures         => closure_lines(),
            Section::Enums            => direction_lines(),
            Section::Structs          => point_lines(),
            Section::Optionals        => optional_lines(),
            Section::ErrorHandling    => error_lines(),
        }
    }

    /// Number of deferred callbacks scheduled and not yet waited for.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Wait for every scheduled deferred callback to finish.
    pub async fn wait_pending(&mut self) -> Result<(), JoinError> {
        for handle in self.pending.drain(..) {
            handle.await?;
        }
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
