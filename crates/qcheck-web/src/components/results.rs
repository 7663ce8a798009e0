//! Shape-directed result rendering: a table for bulk responses, a labeled
//! summary panel for single verdicts. All values pass through verbatim.

use leptos::prelude::*;

use qcheck_core::PredictionResult;

use super::badge::YesNoBadge;

/// Bulk analysis results, one row per checked question in input order.
#[component]
pub fn BulkResultsTable(rows: Vec<PredictionResult>) -> impl IntoView {
    view! {
        <div class="results-panel">
            <h3>"Bulk Analysis Results"</h3>
            <table class="results-table">
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Question"</th>
                        <th>"Similar?"</th>
                        <th>"Same Topic?"</th>
                        <th>"Predicted Topic"</th>
                        <th>"Similar Question"</th>
                        <th>"Marks"</th>
                        <th>"Weightage"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows.into_iter().enumerate().map(|(idx, row)| view! {
                        <tr>
                            <td>{(idx + 1).to_string()}</td>
                            <td class="text-cell">{row.question}</td>
                            <td><YesNoBadge value=row.similar_questions /></td>
                            <td><YesNoBadge value=row.same_topic /></td>
                            <td>{row.predicted_topic.unwrap_or_default()}</td>
                            <td class="text-cell">{row.similar_question_name}</td>
                            <td><span class="badge badge-marks">{row.marks.to_string()}</span></td>
                            <td><span class="badge badge-weightage">{row.weightage.to_string()}</span></td>
                        </tr>
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </div>
    }
}

/// Summary panel for a single-question verdict on the checker page.
#[component]
pub fn SingleResultPanel(result: PredictionResult) -> impl IntoView {
    view! {
        <div class="results-panel">
            <h3>"Result"</h3>
            <dl class="result-fields">
                <dt>"Question"</dt>
                <dd>{result.question}</dd>
                <dt>"Similar Question Found"</dt>
                <dd><YesNoBadge value=result.similar_questions /></dd>
                <dt>"Similar Question"</dt>
                <dd>{result.similar_question_name}</dd>
                <dt>"Same Topic"</dt>
                <dd><YesNoBadge value=result.same_topic /></dd>
                <dt>"Predicted Topic"</dt>
                <dd>{result.predicted_topic.unwrap_or_default()}</dd>
                <dt>"Marks"</dt>
                <dd>{result.marks.to_string()}</dd>
                <dt>"Weightage"</dt>
                <dd>{result.weightage.to_string()}</dd>
            </dl>
        </div>
    }
}

/// Summary panel for the topic page; surfaces the invalid-topic flag in
/// place of a predicted topic.
#[component]
pub fn TopicResultPanel(result: PredictionResult) -> impl IntoView {
    view! {
        <div class="results-panel">
            <h3>"Result"</h3>
            <dl class="result-fields">
                <dt>"Similar Question Found"</dt>
                <dd><YesNoBadge value=result.similar_questions /></dd>
                <dt>"Same Topic"</dt>
                <dd><YesNoBadge value=result.same_topic /></dd>
                <dt>"Similar Question Name"</dt>
                <dd>{result.similar_question_name}</dd>
                <dt>"Invalid Topic"</dt>
                <dd><YesNoBadge value=result.invalid_topic.unwrap_or(false) /></dd>
                <dt>"Predicted Marks"</dt>
                <dd>{result.marks.to_string()}</dd>
                <dt>"Predicted Weightage"</dt>
                <dd>{result.weightage.to_string()}</dd>
            </dl>
        </div>
    }
}
