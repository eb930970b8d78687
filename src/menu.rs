//! Interactive numbered menu.
//!
//! Reads an option per line, prompts for whatever that option needs and
//! routes to the evaluator, the ledger or the simulated LLM. Input and output
//! are generic so sessions can be driven from tests.

use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

use crate::ai::{build_prompt, send_to_llm};
use crate::calculator::{Evaluator, Operator, PercentDraw, display_text};
use crate::history::Ledger;

const BANNER: &str = "LEDGER CALC";
const OPTIONS: &str = "1:+ 2:- 3:* 4:/ 5:^ 6:% 7:LLM 8:hist 0:exit";

/// What a menu option asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    /// Evaluate two operands. `None` means the option matched no operator
    /// and the evaluator receives an empty operator code.
    Calculate(Option<Operator>),
    AskLlm,
    ShowHistory,
    Exit,
}

impl MenuChoice {
    pub fn parse(option: &str) -> Self {
        match option.trim() {
            "0" => Self::Exit,
            "7" => Self::AskLlm,
            "8" => Self::ShowHistory,
            other => Self::Calculate(Operator::from_menu_option(other)),
        }
    }
}

/// One interactive session over borrowed evaluator and ledger.
pub struct Session<'a, D> {
    evaluator: &'a mut Evaluator<D>,
    ledger: &'a mut Ledger,
    system_prompt: &'a str,
}

impl<'a, D: PercentDraw> Session<'a, D> {
    pub fn new(
        evaluator: &'a mut Evaluator<D>,
        ledger: &'a mut Ledger,
        system_prompt: &'a str,
    ) -> Self {
        Self {
            evaluator,
            ledger,
            system_prompt,
        }
    }

    /// Run until option `0` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        loop {
            writeln!(output, "{BANNER}")?;
            writeln!(output, "{OPTIONS}")?;
            write!(output, "Option: ")?;
            output.flush()?;

            let Some(option) = read_line(&mut input)? else {
                break;
            };

            let flow = match MenuChoice::parse(&option) {
                MenuChoice::Exit => ControlFlow::Break(()),
                MenuChoice::AskLlm => self.ask_llm(&mut input, &mut output)?,
                MenuChoice::ShowHistory => self.show_history(&mut output)?,
                MenuChoice::Calculate(op) => self.calculate(op, &mut input, &mut output)?,
            };
            if flow.is_break() {
                break;
            }
        }

        tracing::info!(calculations = self.ledger.count(), "session finished");
        Ok(())
    }

    /// `Break` when input ends before both operands are read.
    fn calculate<R: BufRead, W: Write>(
        &mut self,
        op: Option<Operator>,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<ControlFlow<()>> {
        let Some(a) = prompt(input, output, "Value a: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(b) = prompt(input, output, "Value b: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let code = op.map_or("", |op| op.symbol());

        match self.evaluator.try_compute(&a, &b, code) {
            Ok(result) => {
                if let Err(err) = self.ledger.record(&a, &b, code, result) {
                    tracing::warn!(error = %err, "history log not updated");
                }
                writeln!(output, "= {}", display_text(result))?;
            }
            Err(err) => {
                tracing::debug!(error = %err, "calculation rejected");
                writeln!(output, "error: {err}")?;
            }
        }
        Ok(ControlFlow::Continue(()))
    }

    fn ask_llm<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> io::Result<ControlFlow<()>> {
        let Some(template) = prompt(input, output, "User template: ")? else {
            return Ok(ControlFlow::Break(()));
        };
        let Some(user_input) = prompt(input, output, "User input: ")? else {
            return Ok(ControlFlow::Break(()));
        };

        let request = build_prompt(self.system_prompt, &template, &user_input);
        let response = send_to_llm(&request);
        writeln!(output, "LLM RESP: {response}")?;
        Ok(ControlFlow::Continue(()))
    }

    fn show_history<W: Write>(&self, output: &mut W) -> io::Result<ControlFlow<()>> {
        for line in self.ledger.history() {
            writeln!(output, "{line}")?;
        }
        Ok(ControlFlow::Continue(()))
    }
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    read_line(input)
}

/// Read one line without its terminator. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}
