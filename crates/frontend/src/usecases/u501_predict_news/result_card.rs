use contracts::usecases::u501_predict_news::PredictResponse;
use leptos::prelude::*;

use super::confidence_bar::ConfidenceBar;
use super::view_model::ResultCardModel;

/// Карточка результата. Пока ответа нет, ничего не рисует.
#[component]
pub fn ResultCard(#[prop(into)] result: Signal<Option<PredictResponse>>) -> impl IntoView {
    view! {
        {move || result.get().map(|response| {
            let card = ResultCardModel::from_response(&response);
            view! {
                <div
                    class="result-card"
                    style=format!(
                        "max-width: 672px; margin: 24px auto 0; padding: 24px; border-radius: 8px; border: 2px solid {}; background: {}; box-shadow: 0 10px 15px -3px rgba(0,0,0,0.1);",
                        card.tone.border_color(),
                        card.tone.tint_color(),
                    )
                >
                    <h2 style="font-size: 24px; font-weight: 700; color: #1f2937; margin-bottom: 16px;">
                        "Prediction Result"
                    </h2>
                    <div style="display: flex; flex-direction: column; gap: 16px;">
                        <div>
                            <span style="font-size: 14px; font-weight: 500; color: #4b5563;">"Prediction: "</span>
                            <span style=format!("font-size: 24px; font-weight: 700; color: {};", card.tone.text_color())>
                                {card.prediction.clone()}
                            </span>
                        </div>
                        <div>
                            <span style="font-size: 14px; font-weight: 500; color: #4b5563;">"Model Used: "</span>
                            <span style="font-size: 18px; font-weight: 600; color: #1f2937;">
                                {card.model_label.clone()}
                            </span>
                        </div>
                        <div>
                            <span style="font-size: 14px; font-weight: 500; color: #4b5563;">"Confidence Score: "</span>
                            <span style="font-size: 18px; font-weight: 600; color: #1f2937;">
                                {card.confidence_text.clone()}
                            </span>
                        </div>
                        <div style="padding-top: 8px;">
                            <ConfidenceBar model=card.bar.clone() />
                        </div>
                    </div>
                </div>
            }
        })}
    }
}
