//! Per-session profitability metrics and their aggregation.
//!
//! Everything here is a pure function of its arguments. Degenerate inputs
//! (zero-cost sessions, margins that cannot cover variable costs, empty
//! session lists) resolve to `0.0` instead of NaN or infinity.

use super::coerce::{coerce_rows, RawSessionRow};
use super::types::{
    CalculationReport, DerivedMetrics, EnrichedSession, GlobalParameters, SessionRecord, Summary,
};

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Revenue at which `revenue * (margin - variable) == fixed`.
///
/// Returns 0 when the contribution margin is not positive: such a session
/// loses money on every sale, so no break-even revenue exists.
pub fn breakeven_revenue(fixed_cost_total: f64, margin_rate: f64, variable_rate: f64) -> f64 {
    let denom = margin_rate - variable_rate;
    if denom > 0.0 {
        finite_or_zero(fixed_cost_total / denom)
    } else {
        0.0
    }
}

/// Net profit as a percentage of total estimated cost.
///
/// Cost of goods is approximated as `revenue - gross_profit`.
pub fn roi_percent(
    revenue: f64,
    gross_profit: f64,
    variable_cost: f64,
    fixed_cost_total: f64,
    net_profit: f64,
) -> f64 {
    let total_cost = (revenue - gross_profit) + variable_cost + fixed_cost_total;
    if total_cost != 0.0 {
        finite_or_zero(net_profit / total_cost * 100.0)
    } else {
        0.0
    }
}

pub fn derive_metrics(session: &SessionRecord, params: &GlobalParameters) -> DerivedMetrics {
    let revenue = session.estimated_revenue;
    let variable_rate = session.variable_rate(params);

    let gross_profit = finite_or_zero(revenue * session.gross_margin_rate);
    let variable_cost = finite_or_zero(revenue * variable_rate);
    let fixed_cost_total = finite_or_zero(session.fixed_cost_total());
    let net_profit = finite_or_zero(gross_profit - variable_cost - fixed_cost_total);

    DerivedMetrics {
        gross_profit,
        variable_cost,
        fixed_cost_total,
        net_profit,
        breakeven_revenue: breakeven_revenue(
            fixed_cost_total,
            session.gross_margin_rate,
            variable_rate,
        ),
        roi_percent: roi_percent(
            revenue,
            gross_profit,
            variable_cost,
            fixed_cost_total,
            net_profit,
        ),
    }
}

pub fn enrich_sessions(
    sessions: &[SessionRecord],
    params: &GlobalParameters,
) -> Vec<EnrichedSession> {
    sessions
        .iter()
        .map(|session| EnrichedSession {
            session: session.clone(),
            metrics: derive_metrics(session, params),
        })
        .collect()
}

pub fn summarize(sessions: &[EnrichedSession]) -> Summary {
    let (total_revenue, total_net_profit, roi_sum) =
        sessions.iter().fold((0.0, 0.0, 0.0), |(rev, net, roi), s| {
            (
                rev + s.session.estimated_revenue,
                net + s.metrics.net_profit,
                roi + s.metrics.roi_percent,
            )
        });

    let average_roi = if sessions.is_empty() {
        0.0
    } else {
        roi_sum / sessions.len() as f64
    };

    Summary {
        total_revenue: finite_or_zero(total_revenue),
        total_net_profit: finite_or_zero(total_net_profit),
        average_roi: finite_or_zero(average_roi),
    }
}

pub fn calculate(sessions: &[SessionRecord], params: &GlobalParameters) -> CalculationReport {
    let sessions = enrich_sessions(sessions, params);
    let summary = summarize(&sessions);
    CalculationReport {
        parameters: *params,
        sessions,
        summary,
    }
}

/// Coerce raw rows, then [`calculate`].
pub fn calculate_raw(rows: &[RawSessionRow], params: &GlobalParameters) -> CalculationReport {
    calculate(&coerce_rows(rows), params)
}
