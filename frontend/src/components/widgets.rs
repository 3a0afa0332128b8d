//! Small presentational pieces shared by every screen.

use shared::analysis::{ChartPoint, Share};
use shared::format::thousands;
use shared::thresholds::Tone;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProgressProps {
    pub value: f64,
    #[prop_or(Tone::Info)]
    pub tone: Tone,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressProps) -> Html {
    let width = props.value.clamp(0.0, 100.0);
    html! {
        <div class="progress">
            <div
                class={classes!("progress-fill", props.tone.css_class())}
                style={format!("width: {}%", width)}
            ></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub text: AttrValue,
    #[prop_or(Tone::Neutral)]
    pub tone: Tone,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!("badge", props.tone.css_class())}>{ props.text.clone() }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    pub icon: AttrValue,
    #[prop_or(Tone::Info)]
    pub tone: Tone,
    /// Draws a progress bar under the value when set.
    #[prop_or_default]
    pub progress: Option<f64>,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class={classes!("stat-card", props.tone.css_class())}>
            <div class="stat-card-body">
                <div>
                    <p class="stat-title">{ props.title.clone() }</p>
                    <p class="stat-value">{ props.value.clone() }</p>
                    if let Some(subtitle) = &props.subtitle {
                        <p class="stat-subtitle">{ subtitle.clone() }</p>
                    }
                </div>
                <i class={classes!("fa-solid", props.icon.to_string(), "stat-icon")}></i>
            </div>
            if let Some(value) = props.progress {
                <ProgressBar value={value} tone={props.tone} />
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
    pub tabs: Vec<&'static str>,
    pub active: usize,
    pub on_select: Callback<usize>,
}

#[function_component(TabBar)]
pub fn tab_bar(props: &TabBarProps) -> Html {
    html! {
        <div class="tab-bar">
            { for props.tabs.iter().enumerate().map(|(index, label)| {
                let on_select = props.on_select.clone();
                html! {
                    <button
                        class={classes!("tab", (index == props.active).then_some("active"))}
                        onclick={move |_| on_select.emit(index)}
                    >
                        { *label }
                    </button>
                }
            })}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BarChartProps {
    pub title: AttrValue,
    pub points: Vec<ChartPoint>,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(Tone::Info)]
    pub tone: Tone,
}

/// Horizontal bars scaled to the largest value.
#[function_component(BarChart)]
pub fn bar_chart(props: &BarChartProps) -> Html {
    let max = props
        .points
        .iter()
        .map(|point| point.value)
        .fold(0.0, f64::max);

    html! {
        <div class="chart-card">
            <h3>{ props.title.clone() }</h3>
            if props.points.is_empty() {
                <p class="empty-state">{"No data available"}</p>
            } else {
                <div class="bar-chart">
                    { for props.points.iter().map(|point| {
                        let width = if max > 0.0 { point.value / max * 100.0 } else { 0.0 };
                        html! {
                            <div class="bar-row" title={point.full_label.clone()}>
                                <span class="bar-label">{ point.label.clone() }</span>
                                <div class="bar-track">
                                    <div
                                        class={classes!("bar-fill", props.tone.css_class())}
                                        style={format!("width: {:.1}%", width)}
                                    ></div>
                                </div>
                                <span class="bar-value">
                                    { format!("{}{}{}", props.prefix, thousands(point.value), props.suffix) }
                                </span>
                            </div>
                        }
                    })}
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ShareChartProps {
    pub title: AttrValue,
    pub shares: Vec<Share>,
}

/// Pie data drawn as one stacked bar with a legend.
#[function_component(ShareChart)]
pub fn share_chart(props: &ShareChartProps) -> Html {
    const PALETTE: [&str; 6] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82CA9D"];

    html! {
        <div class="chart-card">
            <h3>{ props.title.clone() }</h3>
            <div class="share-bar">
                { for props.shares.iter().enumerate().map(|(index, share)| html! {
                    <div
                        class="share-segment"
                        title={format!("{}: {}", share.label, thousands(share.value))}
                        style={format!("width: {}%; background: {}", share.percent, PALETTE[index % PALETTE.len()])}
                    ></div>
                })}
            </div>
            <ul class="share-legend">
                { for props.shares.iter().enumerate().map(|(index, share)| html! {
                    <li>
                        <span class="legend-swatch" style={format!("background: {}", PALETTE[index % PALETTE.len()])}></span>
                        { format!("{}: {}%", share.label, share.percent) }
                    </li>
                })}
            </ul>
        </div>
    }
}

/// Font Awesome class for the icon names the insight feed uses.
pub fn insight_icon(name: &str) -> &'static str {
    match name {
        "Zap" => "fa-bolt",
        "Clock" => "fa-clock",
        "Target" => "fa-bullseye",
        "AlertTriangle" => "fa-triangle-exclamation",
        "Users" => "fa-users",
        "Brain" => "fa-brain",
        "BarChart3" => "fa-chart-column",
        _ => "fa-arrow-trend-up",
    }
}
