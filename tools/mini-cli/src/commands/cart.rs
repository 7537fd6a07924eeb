//! Scripted cart session command.

use anyhow::{Context as _, Result};
use mini_commerce::catalog::Catalog;
use mini_commerce::store::{Action, History, StoreState};
use serde::Serialize;
use serde_json::json;

use super::CartArgs;
use crate::context::Context;
use crate::view::{describe_params, listing_json, render_cart, render_listing, CartView};

/// One step of a session script.
#[derive(Debug, PartialEq)]
enum Step {
    Dispatch(Action),
    Undo,
    Redo,
}

impl Step {
    fn parse(line: &str) -> Result<Self> {
        match line.trim() {
            "undo" => Ok(Step::Undo),
            "redo" => Ok(Step::Redo),
            _ => Ok(Step::Dispatch(line.parse()?)),
        }
    }
}

/// A script line and where it came from.
struct ScriptLine {
    origin: String,
    text: String,
}

/// An action the session refused.
#[derive(Debug, Serialize)]
struct Skipped {
    origin: String,
    action: String,
    reason: String,
}

struct SessionReport {
    state: StoreState,
    skipped: Vec<Skipped>,
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut lines = Vec::new();
    if let Some(script) = &args.script {
        let path = ctx.resolve_path(script);
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;
        lines.extend(script_lines(script, &content));
    }
    lines.extend(args.actions.iter().enumerate().map(|(i, text)| ScriptLine {
        origin: format!("action {}", i + 1),
        text: text.clone(),
    }));

    let initial = StoreState::with_params(ctx.config.defaults.params());
    let report = run_session(&ctx.catalog, initial, &lines)?;

    for skipped in &report.skipped {
        ctx.output.warn(&format!(
            "{}: `{}` skipped: {}",
            skipped.origin, skipped.action, skipped.reason
        ));
    }

    let state = &report.state;
    let listing = state.listing(&ctx.catalog);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "params": state.params,
            "products": listing_json(&listing),
            "cart": CartView::from(&state.cart),
            "skipped": report.skipped,
        }))?;
        return Ok(());
    }

    render_listing(&ctx.output, &describe_params(&state.params), &listing);
    render_cart(&ctx.output, &state.cart);
    Ok(())
}

/// Non-empty, non-comment lines of a script file.
fn script_lines(name: &str, content: &str) -> Vec<ScriptLine> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let line = line.trim();
            !line.is_empty() && !line.starts_with('#')
        })
        .map(|(i, line)| ScriptLine {
            origin: format!("{}:{}", name, i + 1),
            text: line.trim().to_string(),
        })
        .collect()
}

/// Apply every line in order. Unparseable lines abort the run; refused
/// actions are collected and the session continues.
fn run_session(catalog: &Catalog, initial: StoreState, lines: &[ScriptLine]) -> Result<SessionReport> {
    let mut history = History::new(initial);
    let mut skipped = Vec::new();

    for line in lines {
        let step = Step::parse(&line.text)
            .with_context(|| format!("{}: cannot run `{}`", line.origin, line.text))?;

        let outcome = match step {
            Step::Undo => history.undo().then_some(()).ok_or("nothing to undo".to_string()),
            Step::Redo => history.redo().then_some(()).ok_or("nothing to redo".to_string()),
            Step::Dispatch(action) => match history.dispatch(catalog, &action) {
                Ok(changed) => {
                    tracing::debug!(origin = %line.origin, ?action, changed, "action applied");
                    Ok(())
                }
                Err(rejection) => Err(rejection.to_string()),
            },
        };

        if let Err(reason) = outcome {
            skipped.push(Skipped {
                origin: line.origin.clone(),
                action: line.text.clone(),
                reason,
            });
        }
    }

    Ok(SessionReport {
        state: history.into_current(),
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mini_commerce::catalog::ProductId;

    fn inline(actions: &[&str]) -> Vec<ScriptLine> {
        actions
            .iter()
            .enumerate()
            .map(|(i, text)| ScriptLine {
                origin: format!("action {}", i + 1),
                text: text.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_step_parse() {
        assert_eq!(Step::parse("undo").unwrap(), Step::Undo);
        assert_eq!(Step::parse(" redo ").unwrap(), Step::Redo);
        assert_eq!(
            Step::parse("add 3").unwrap(),
            Step::Dispatch(Action::AddToCart(ProductId::new(3)))
        );
        assert!(Step::parse("checkout").is_err());
    }

    #[test]
    fn test_script_lines_skip_comments() {
        let lines = script_lines("s.txt", "# setup\nadd 1\n\n  qty 1 2  \n");
        let texts: Vec<&str> = lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(texts, vec!["add 1", "qty 1 2"]);
        assert_eq!(lines[0].origin, "s.txt:2");
        assert_eq!(lines[1].origin, "s.txt:4");
    }

    #[test]
    fn test_session_collects_rejections() {
        let catalog = Catalog::builtin();
        let lines = inline(&["add 1", "add 1", "add 1", "qty 1 10", "add 2", "undo"]);

        let report = run_session(&catalog, StoreState::new(), &lines).unwrap();
        assert_eq!(report.state.cart.qty_of(ProductId::new(1)), 2);

        let skipped: Vec<&str> = report.skipped.iter().map(|s| s.action.as_str()).collect();
        assert_eq!(skipped, vec!["qty 1 10", "add 2"]);
    }

    #[test]
    fn test_session_undo_on_fresh_state_is_skipped() {
        let catalog = Catalog::builtin();
        let report = run_session(&catalog, StoreState::new(), &inline(&["undo", "redo"])).unwrap();
        assert_eq!(report.skipped.len(), 2);
        assert_eq!(report.skipped[0].reason, "nothing to undo");
    }

    #[test]
    fn test_session_aborts_on_bad_line() {
        let catalog = Catalog::builtin();
        let result = run_session(&catalog, StoreState::new(), &inline(&["add 1", "fly 2"]));
        let message = format!("{:#}", result.err().unwrap());
        assert!(message.contains("action 2"));
    }
}
