//! Room page parsing.
//!
//! The room page holds a monitor table whose first column nests the washer
//! table and whose second column nests the dryer table. Rows are counted in
//! document order including nested ones, so each machine spans
//! [`ROWS_PER_MACHINE`] rows: the descriptor row with the ordinal, the two
//! rows of the progress bar table nested inside it, and the status row.

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Machine, RoomMachines};
use crate::parsing::selectors::{self, parse_selector};
use crate::parsing::status::classify_status;
use crate::utils::text::normalize_whitespace;

/// Number of table rows rendered per machine, nested rows included.
pub const ROWS_PER_MACHINE: usize = 4;

/// Offset of the status row inside a machine's row group.
const STATUS_ROW: usize = ROWS_PER_MACHINE - 1;

/// Compiled selectors for the per-machine cells.
struct CellSelectors {
    number: Selector,
    progress_bar: Selector,
    status: Selector,
}

impl CellSelectors {
    fn new() -> Result<Self> {
        Ok(Self {
            number: parse_selector(selectors::MACHINE_NUMBER)?,
            progress_bar: parse_selector(selectors::PROGRESS_BAR)?,
            status: parse_selector(selectors::STATUS_TEXT)?,
        })
    }
}

/// Parse a room page into its washers and dryers.
///
/// Fails with [`AppError::MachineList`] when the monitor container is
/// missing. Individual machines that cannot be read are skipped.
pub fn parse_room(html: &str) -> Result<RoomMachines> {
    let document = Html::parse_document(html);

    let monitor_sel = parse_selector(selectors::MONITOR)?;
    if document.select(&monitor_sel).next().is_none() {
        return Err(AppError::MachineList(format!(
            "no '{}' container on room page",
            selectors::MONITOR
        )));
    }

    let washer_sel = parse_selector(selectors::WASHER_ROWS)?;
    let dryer_sel = parse_selector(selectors::DRYER_ROWS)?;
    let washer_rows: Vec<ElementRef> = document.select(&washer_sel).collect();
    let dryer_rows: Vec<ElementRef> = document.select(&dryer_sel).collect();

    Ok(RoomMachines {
        washers: parse_machine_rows(&washer_rows)?,
        dryers: parse_machine_rows(&dryer_rows)?,
    })
}

/// Group table rows into machines, keeping the original row order.
///
/// A trailing group shorter than [`ROWS_PER_MACHINE`] is dropped. A group
/// whose ordinal cannot be read is skipped without affecting the others.
pub fn parse_machine_rows(rows: &[ElementRef<'_>]) -> Result<Vec<Machine>> {
    let cells = CellSelectors::new()?;

    let leftover = rows.len() % ROWS_PER_MACHINE;
    if leftover != 0 {
        log::warn!(
            "Machine table has {} rows, not a multiple of {}; ignoring the last {}",
            rows.len(),
            ROWS_PER_MACHINE,
            leftover
        );
    }

    let mut machines = Vec::with_capacity(rows.len() / ROWS_PER_MACHINE);
    for (index, group) in rows.chunks_exact(ROWS_PER_MACHINE).enumerate() {
        match parse_machine(group, &cells) {
            Ok(machine) => machines.push(machine),
            Err(error) => log::warn!("Skipping machine group #{index}: {error}"),
        }
    }
    Ok(machines)
}

fn parse_machine(group: &[ElementRef<'_>], cells: &CellSelectors) -> Result<Machine> {
    let descriptor = group[0];

    let raw_number = select_text(descriptor, &cells.number);
    let number = raw_number
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| AppError::MachineDetail(raw_number.clone()))?;

    let phrase = select_text(group[STATUS_ROW], &cells.status);
    let width = descriptor
        .select(&cells.progress_bar)
        .next()
        .and_then(|img| img.value().attr("width"));

    Ok(Machine {
        number,
        status: classify_status(&phrase, width),
    })
}

/// Whitespace-normalized text of every element matching `selector`.
fn select_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    let raw: Vec<String> = scope
        .select(selector)
        .map(|el| el.text().collect::<String>())
        .collect();
    normalize_whitespace(&raw.join(" "))
}
