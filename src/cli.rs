//! Command-line front end.
//!
//! One-shot subcommands print a single report; `menu` runs the interactive
//! five-option loop; `serve` starts the HTTP API. Rendering and the menu loop
//! are generic over their reader and writer so they can be driven from tests.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::api::{AppState, create_router};
use crate::calculation::{DATE_FORMAT, TIME_FORMAT, parse_date, round_currency};
use crate::config::{ConfigLoader, DEFAULT_CONFIG_PATH, PayrollConfig};
use crate::error::{PayrollError, PayrollResult};
use crate::ingest::{load_attendance, load_employees};
use crate::models::{Employee, GrossSalaryReport, HoursWorkedReport, NetSalaryReport};
use crate::service::PayrollService;

/// Command-line interface definition for the payroll tool.
#[derive(Debug, Parser)]
#[command(
    name = "payroll",
    version = env!("CARGO_PKG_VERSION"),
    about = "Payroll computation: hours worked, gross pay and net pay after statutory deductions",
    long_about = None
)]
pub struct Cli {
    /// Configuration file (default: config/payroll.yaml if present)
    #[arg(global = true, long = "config")]
    pub config: Option<PathBuf>,

    /// Override the employee CSV path
    #[arg(global = true, long = "employees")]
    pub employees: Option<PathBuf>,

    /// Override the attendance CSV path
    #[arg(global = true, long = "attendance")]
    pub attendance: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List all employee numbers
    List,

    /// Display an employee's details
    Info {
        /// Employee number
        employee_id: String,
    },

    /// Compute hours worked over a date range
    Hours {
        /// Employee number
        employee_id: String,
        /// Start date (MM/DD/YYYY)
        start: String,
        /// End date (MM/DD/YYYY)
        end: String,
    },

    /// Compute gross salary over a date range
    Gross {
        /// Employee number
        employee_id: String,
        /// Start date (MM/DD/YYYY)
        start: String,
        /// End date (MM/DD/YYYY)
        end: String,
    },

    /// Compute net salary after statutory deductions
    Net {
        /// Employee number
        employee_id: String,
    },

    /// Run the interactive menu
    Menu,

    /// Serve the read-only HTTP API
    Serve {
        /// Bind address, overriding the configuration
        #[arg(long = "bind")]
        bind: Option<String>,
    },
}

/// Resolves configuration from the file and command-line overrides.
pub fn resolve_config(cli: &Cli) -> PayrollResult<PayrollConfig> {
    let loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::load_or_default(DEFAULT_CONFIG_PATH)?,
    };

    let bind = match &cli.command {
        Commands::Serve { bind } => bind.clone(),
        _ => None,
    };

    Ok(loader
        .with_data_overrides(cli.employees.clone(), cli.attendance.clone())
        .with_bind_override(bind)
        .config()
        .clone())
}

/// Loads both data sources and builds the service.
///
/// Rejected records are logged during loading and do not stop startup.
pub fn build_service(config: &PayrollConfig) -> PayrollResult<PayrollService> {
    let employees = load_employees(&config.data.employees)?;
    let attendance = load_attendance(&config.data.attendance)?;

    let skipped = employees.rejected.len() + attendance.rejected.len();
    if skipped > 0 {
        warn!(skipped, "Some records were skipped during loading");
    }

    Ok(PayrollService::new(employees.data, attendance.data))
}

/// Runs a parsed command line to completion.
pub fn run(cli: Cli) -> PayrollResult<()> {
    let config = resolve_config(&cli)?;
    let service = build_service(&config)?;
    let currency = config.display.currency.as_str();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::List => {
            for id in service.employee_ids() {
                writeln!(out, "{}", id).map_err(output_error)?;
            }
        }
        Commands::Info { employee_id } => {
            let employee = service.employee_info(&employee_id)?;
            render_employee(&mut out, employee, currency).map_err(output_error)?;
        }
        Commands::Hours {
            employee_id,
            start,
            end,
        } => {
            let (start, end) = (parse_date(&start)?, parse_date(&end)?);
            let report = service.hours_worked(&employee_id, start, end)?;
            render_hours(&mut out, &report).map_err(output_error)?;
        }
        Commands::Gross {
            employee_id,
            start,
            end,
        } => {
            let (start, end) = (parse_date(&start)?, parse_date(&end)?);
            let report = service.gross_salary(&employee_id, start, end)?;
            render_gross(&mut out, &report, currency).map_err(output_error)?;
        }
        Commands::Net { employee_id } => {
            let report = service.net_salary(&employee_id)?;
            render_net(&mut out, &report, currency).map_err(output_error)?;
        }
        Commands::Menu => {
            let stdin = io::stdin();
            run_menu(&service, currency, stdin.lock(), &mut out).map_err(output_error)?;
        }
        Commands::Serve { .. } => {
            drop(out);
            serve(service, &config.server.bind_address)?;
        }
    }

    Ok(())
}

fn serve(service: PayrollService, bind_address: &str) -> PayrollResult<()> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| io_error("starting the async runtime", e))?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| io_error(&format!("binding {}", bind_address), e))?;
        info!(bind_address, "Starting API server");
        axum::serve(listener, create_router(AppState::new(service)))
            .await
            .map_err(|e| io_error(&format!("serving on {}", bind_address), e))
    })
}

fn io_error(context: &str, e: io::Error) -> PayrollError {
    PayrollError::Io {
        context: context.to_string(),
        message: e.to_string(),
    }
}

fn output_error(e: io::Error) -> PayrollError {
    io_error("writing to stdout", e)
}

fn money(currency: &str, amount: Decimal) -> String {
    format!("{} {:.2}", currency, round_currency(amount))
}

/// Prints an employee's details.
pub fn render_employee<W: Write>(
    out: &mut W,
    employee: &Employee,
    currency: &str,
) -> io::Result<()> {
    writeln!(out, "Employee Details:")?;
    writeln!(out, "Employee Number: {}", employee.id)?;
    writeln!(out, "Full Name: {}", employee.full_name())?;
    writeln!(out, "Birthday: {}", employee.birthday.format(DATE_FORMAT))?;
    writeln!(out, "Basic Salary: {}", money(currency, employee.basic_salary))?;
    writeln!(out, "Hourly Rate: {}", money(currency, employee.hourly_rate))
}

/// Prints the per-day hours and the total.
pub fn render_hours<W: Write>(out: &mut W, report: &HoursWorkedReport) -> io::Result<()> {
    for day in &report.days {
        if day.counts_toward_total() {
            writeln!(out, "Date: {}, Hours: {}", day.date.format(DATE_FORMAT), day.duration)?;
        } else {
            writeln!(
                out,
                "Date: {}, Hours: {} (clock-out {} before clock-in {}, excluded)",
                day.date.format(DATE_FORMAT),
                day.duration,
                day.clock_out.format(TIME_FORMAT),
                day.clock_in.format(TIME_FORMAT),
            )?;
        }
    }
    writeln!(out, "Total Hours: {}", report.total_duration)
}

/// Prints the gross salary line.
pub fn render_gross<W: Write>(
    out: &mut W,
    report: &GrossSalaryReport,
    currency: &str,
) -> io::Result<()> {
    writeln!(
        out,
        "Gross salary for {}: {}",
        report.full_name,
        money(currency, report.gross_salary)
    )?;
    if !report.flagged_dates.is_empty() {
        let dates: Vec<String> = report
            .flagged_dates
            .iter()
            .map(|d| d.format(DATE_FORMAT).to_string())
            .collect();
        writeln!(out, "Excluded days: {}", dates.join(", "))?;
    }
    Ok(())
}

/// Prints the net salary breakdown.
pub fn render_net<W: Write>(
    out: &mut W,
    report: &NetSalaryReport,
    currency: &str,
) -> io::Result<()> {
    let b = &report.breakdown;
    writeln!(out, "Net Salary Calculation:")?;
    writeln!(out, "Basic Salary: {}", money(currency, b.basic_salary))?;
    writeln!(out, "SSS Contribution: {}", money(currency, b.sss))?;
    writeln!(out, "PhilHealth Contribution: {}", money(currency, b.philhealth))?;
    writeln!(out, "Pag-IBIG Contribution: {}", money(currency, b.pagibig))?;
    writeln!(out, "Taxable Income: {}", money(currency, b.taxable_income))?;
    writeln!(out, "Withholding Tax: {}", money(currency, b.withholding_tax))?;
    writeln!(out, "Net Salary: {}", money(currency, b.net_salary))
}

/// Menu entries, numbered from 1.
const MENU_OPTIONS: [&str; 5] = [
    "Display Employee Information",
    "Compute Hours Worked",
    "Compute Gross Salary",
    "Compute Net Salary",
    "Exit",
];

/// Runs the interactive menu until "Exit" is chosen or input ends.
pub fn run_menu<R: BufRead, W: Write>(
    service: &PayrollService,
    currency: &str,
    mut input: R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "Payroll Menu:")?;
        for (i, option) in MENU_OPTIONS.iter().enumerate() {
            writeln!(out, "{}. {}", i + 1, option)?;
        }

        let Some(choice) = prompt(&mut input, out, "Enter your choice: ")? else {
            return Ok(());
        };

        let step = match choice.parse::<u32>() {
            Ok(1) => menu_employee_info(service, currency, &mut input, out),
            Ok(2) => menu_hours(service, &mut input, out),
            Ok(3) => menu_gross(service, currency, &mut input, out),
            Ok(4) => menu_net(service, currency, &mut input, out),
            Ok(5) => {
                writeln!(out, "Exiting...")?;
                return Ok(());
            }
            _ => {
                writeln!(out, "Invalid choice.")?;
                Ok(MenuStep::Continue)
            }
        }?;

        if step == MenuStep::InputClosed {
            return Ok(());
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
enum MenuStep {
    Continue,
    InputClosed,
}

/// Writes a prompt and reads one trimmed line. `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn report_error<W: Write>(out: &mut W, error: &PayrollError) -> io::Result<()> {
    match error {
        PayrollError::EmployeeNotFound { .. } => writeln!(out, "Employee not found."),
        PayrollError::AttendanceNotFound { .. } => {
            writeln!(out, "Employee not found in attendance records.")
        }
        PayrollError::InvalidDate { .. } => writeln!(out, "Invalid date format."),
        other => writeln!(out, "Error: {}", other),
    }
}

fn read_range<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
) -> io::Result<Option<(String, String)>> {
    let Some(start) = prompt(input, out, "Enter start date (MM/DD/YYYY): ")? else {
        return Ok(None);
    };
    let Some(end) = prompt(input, out, "Enter end date (MM/DD/YYYY): ")? else {
        return Ok(None);
    };
    Ok(Some((start, end)))
}

fn menu_employee_info<R: BufRead, W: Write>(
    service: &PayrollService,
    currency: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<MenuStep> {
    let Some(id) = prompt(input, out, "Enter employee number: ")? else {
        return Ok(MenuStep::InputClosed);
    };
    match service.employee_info(&id) {
        Ok(employee) => render_employee(out, employee, currency)?,
        Err(e) => report_error(out, &e)?,
    }
    Ok(MenuStep::Continue)
}

fn menu_hours<R: BufRead, W: Write>(
    service: &PayrollService,
    input: &mut R,
    out: &mut W,
) -> io::Result<MenuStep> {
    let Some(id) = prompt(input, out, "Enter employee number: ")? else {
        return Ok(MenuStep::InputClosed);
    };
    // Checked before asking for dates.
    if !service.ledger().contains_employee(&id) {
        report_error(out, &PayrollError::AttendanceNotFound { employee_id: id })?;
        return Ok(MenuStep::Continue);
    }
    let Some((start, end)) = read_range(input, out)? else {
        return Ok(MenuStep::InputClosed);
    };

    let result = parse_date(&start)
        .and_then(|s| Ok((s, parse_date(&end)?)))
        .and_then(|(s, e)| service.hours_worked(&id, s, e));
    match result {
        Ok(report) => render_hours(out, &report)?,
        Err(e) => report_error(out, &e)?,
    }
    Ok(MenuStep::Continue)
}

fn menu_gross<R: BufRead, W: Write>(
    service: &PayrollService,
    currency: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<MenuStep> {
    let Some(id) = prompt(input, out, "Enter employee number: ")? else {
        return Ok(MenuStep::InputClosed);
    };
    if !service.directory().contains(&id) {
        report_error(out, &PayrollError::EmployeeNotFound { employee_id: id })?;
        return Ok(MenuStep::Continue);
    }
    let Some((start, end)) = read_range(input, out)? else {
        return Ok(MenuStep::InputClosed);
    };

    let result = parse_date(&start)
        .and_then(|s| Ok((s, parse_date(&end)?)))
        .and_then(|(s, e)| service.gross_salary(&id, s, e));
    match result {
        Ok(report) => render_gross(out, &report, currency)?,
        Err(e) => report_error(out, &e)?,
    }
    Ok(MenuStep::Continue)
}

fn menu_net<R: BufRead, W: Write>(
    service: &PayrollService,
    currency: &str,
    input: &mut R,
    out: &mut W,
) -> io::Result<MenuStep> {
    let Some(id) = prompt(input, out, "Enter employee number: ")? else {
        return Ok(MenuStep::InputClosed);
    };
    match service.net_salary(&id) {
        Ok(report) => render_net(out, &report, currency)?,
        Err(e) => report_error(out, &e)?,
    }
    Ok(MenuStep::Continue)
}
