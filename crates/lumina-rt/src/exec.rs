//! The statement executor: block execution, the top-level instruction
//! pointer with its reverse semantics, and retroactive negative-line
//! lifetime bindings.

use crate::context::Context;
use crate::error::RtError;
use lumina_ast::{Comparison, Condition, Lifetime, Statement};
use lumina_eval::Value;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// The non-error control-flow signal a statement can produce. `Return`
/// is not a `RtError` — it is the normal mechanism that unwinds one
/// call frame, or the top-level loop outside of any call.
#[derive(Debug, Clone)]
pub enum Flow {
    Normal,
    Return(Value),
}

/// Runs a complete top-level statement list to completion, honoring
/// `REVERSE` and retroactive lifetime bindings.
pub fn run_program(statements: &[Statement], ctx: &mut Context) -> Result<(), RtError> {
    let retro = compute_retroactive_bindings(statements);
    let len = statements.len();
    if len == 0 {
        return Ok(());
    }

    let mut ip: i64 = if ctx.reverse { len as i64 - 1 } else { 0 };

    while ip >= 0 && (ip as usize) < len {
        let idx = ip as usize;
        let next_line = ctx.current_line + 1;

        if let Some(bindings) = retro.get(&next_line) {
            for (name, expr) in bindings {
                let value = lumina_eval::evaluate(expr, ctx).map_err(RtError::from)?;
                ctx.frame_mut().set(name, value);
            }
        }

        trace!(ip, next_line, "executing top-level statement");
        match exec_stmt(&statements[idx], ctx)? {
            Flow::Return(v) => {
                debug!("top-level RETURN terminates execution");
                ctx.last_return = v;
                return Ok(());
            }
            Flow::Normal => {}
        }

        ip += if ctx.reverse { -1 } else { 1 };
    }

    Ok(())
}

/// Executes a block body (a function body, or an `IF`/`WHILE` body),
/// stopping early and propagating a `Return`.
pub fn exec_block(body: &[Statement], ctx: &mut Context) -> Result<Flow, RtError> {
    for stmt in body {
        if let Flow::Return(v) = exec_stmt(stmt, ctx)? {
            return Ok(Flow::Return(v));
        }
    }
    Ok(Flow::Normal)
}

fn exec_stmt(stmt: &Statement, ctx: &mut Context) -> Result<Flow, RtError> {
    let keyword = stmt.keyword();
    if ctx.is_disabled(keyword) {
        return Err(RtError::DisabledToken(keyword.to_string()));
    }

    let flow = match stmt {
        Statement::Import { path } => {
            debug!(path, "registering FFI handle");
            ctx.add_ffi_handle(path.clone());
            Flow::Normal
        }
        Statement::FunctionDef { name, body, .. } => {
            ctx.define_function(name, body.clone());
            Flow::Normal
        }
        Statement::Assign { name, expr } => {
            let value = lumina_eval::evaluate(expr, ctx)?;
            ctx.clear_expirations(name);
            ctx.frame_mut().set(name, value);
            Flow::Normal
        }
        Statement::LifetimeAssign {
            name,
            lifetime,
            expr,
        } => {
            let value = lumina_eval::evaluate(expr, ctx)?;
            ctx.clear_expirations(name);
            ctx.frame_mut().set(name, value);
            schedule_lifetime(ctx, name, *lifetime);
            Flow::Normal
        }
        Statement::InlineCall { name, args } => {
            let mut values = Vec::with_capacity(args.len());
            for arg in args {
                values.push(lumina_eval::evaluate(arg, ctx)?);
            }
            let result = dispatch_call(name, &values, ctx)?;
            ctx.last_return = result;
            Flow::Normal
        }
        Statement::Delete { target } => {
            ctx.delete(target);
            Flow::Normal
        }
        Statement::Previous { name } => {
            ctx.previous(name)
                .ok_or_else(|| RtError::NoPrevious(name.clone()))?;
            Flow::Normal
        }
        Statement::Return { expr } => {
            let value = lumina_eval::evaluate(expr, ctx)?;
            Flow::Return(value)
        }
        Statement::Reverse => {
            ctx.reverse = !ctx.reverse;
            Flow::Normal
        }
        Statement::If { condition, body } => {
            if eval_condition(condition, ctx)? {
                exec_block(body, ctx)?
            } else {
                Flow::Normal
            }
        }
        Statement::While { condition, body } => {
            let mut flow = Flow::Normal;
            while eval_condition(condition, ctx)? {
                flow = exec_block(body, ctx)?;
                if matches!(flow, Flow::Return(_)) {
                    break;
                }
            }
            flow
        }
    };

    ctx.advance_line_and_expire();
    Ok(flow)
}

/// Schedules a variable's expiry for a lifetime-assignment: a positive
/// line-lifetime expires `L` executed lines after this one; a negative
/// line-lifetime instead expires this same binding immediately (its
/// readable window lies entirely *before* this statement — see
/// `compute_retroactive_bindings`); `0`/`0s` is a no-op; a positive
/// seconds-lifetime expires at a wall clock deadline.
fn schedule_lifetime(ctx: &mut Context, name: &str, lifetime: Lifetime) {
    match lifetime {
        Lifetime::Lines(n) if n > 0 => {
            ctx.schedule_line_expiration(name, ctx.current_line + 1 + n as u64);
        }
        Lifetime::Lines(n) if n < 0 => {
            ctx.schedule_line_expiration(name, ctx.current_line + 1);
        }
        Lifetime::Lines(_) => {}
        Lifetime::Seconds(s) if s > 0.0 => {
            ctx.schedule_time_expiration(name, Instant::now() + Duration::from_secs_f64(s));
        }
        Lifetime::Seconds(_) => {}
    }
}

fn eval_condition(condition: &Condition, ctx: &mut Context) -> Result<bool, RtError> {
    match condition {
        Condition::Truthy(expr) => Ok(lumina_eval::evaluate(expr, ctx)?.truthy()),
        Condition::Compare { left, op, right } => {
            let l = lumina_eval::evaluate(left, ctx)?;
            let r = lumina_eval::evaluate(right, ctx)?;
            let ord = l.compare(&r).ok_or_else(|| {
                RtError::TypeError(format!("cannot compare {} and {}", l.tag(), r.tag()))
            })?;
            Ok(matches_comparison(*op, ord))
        }
    }
}

fn matches_comparison(op: Comparison, ord: Ordering) -> bool {
    match op {
        Comparison::Less => ord == Ordering::Less,
        Comparison::Greater => ord == Ordering::Greater,
        Comparison::LessEq => ord != Ordering::Greater,
        Comparison::GreaterEq => ord != Ordering::Less,
        Comparison::Equal => ord == Ordering::Equal,
        Comparison::NotEqual => ord != Ordering::Equal,
    }
}

/// Dispatch order for a called name: built-in table, then the user
/// function registry (fresh frame, arguments evaluated but never bound
/// into it), then the FFI hook, else `UnknownFunction`.
fn dispatch_call(name: &str, args: &[Value], ctx: &mut Context) -> Result<Value, RtError> {
    if name.eq_ignore_ascii_case("PRINTLINE") {
        for v in args {
            println!("{}", v.stringify());
        }
        return Ok(Value::Number(0.0));
    }

    if let Some(function) = ctx.function(name).cloned() {
        ctx.push_frame();
        let result = exec_block(&function.body, ctx);
        ctx.pop_frame();
        return match result? {
            Flow::Return(v) => Ok(v),
            Flow::Normal => Ok(Value::Number(0.0)),
        };
    }

    if let Some(v) = ctx.ffi_resolve(name, args) {
        return Ok(v);
    }

    Err(RtError::UnknownFunction(name.to_string()))
}

/// Precomputes, from the static top-level statement list, every
/// synthetic `(name, expr)` binding a negative-line-lifetime
/// assignment contributes to earlier execution lines.
fn compute_retroactive_bindings(statements: &[Statement]) -> HashMap<u64, Vec<(String, String)>> {
    let mut map: HashMap<u64, Vec<(String, String)>> = HashMap::new();

    for (i, stmt) in statements.iter().enumerate() {
        if let Statement::LifetimeAssign {
            name,
            lifetime: Lifetime::Lines(k),
            expr,
        } = stmt
        {
            if *k < 0 {
                let def_line = i as i64 + 1;
                let span = -k;
                let start = std::cmp::max(1, def_line - span);
                let mut line = start;
                while line < def_line {
                    map.entry(line as u64)
                        .or_default()
                        .push((name.clone(), expr.clone()));
                    line += 1;
                }
            }
        }
    }

    map
}
