//! Per-aggregate renderers for the dashboard's list panels

use shorts_types::AnalysisAggregate;

use super::format::{format_count, truncate_title};
use super::{Panel, PanelKind, PanelLine};

const BREAKOUT_TITLE_CHARS: usize = 40;

/// Build every non-empty list panel in dashboard order.
pub fn dashboard_panels(analysis: &AnalysisAggregate, limit: usize) -> Vec<Panel> {
    let channels = &analysis.channel_analysis;
    let time = &analysis.time_analysis;

    [
        Panel::build(
            PanelKind::Keywords,
            &analysis.keyword_analysis,
            limit,
            |(word, count)| PanelLine::new(word.clone(), format!("{count} times")),
        ),
        Panel::build(
            PanelKind::ChannelsByVideoCount,
            &channels.top_channels_by_video_count,
            limit,
            |c| PanelLine::new(c.channel.clone(), plural(c.video_count, "video")),
        ),
        Panel::build(
            PanelKind::ChannelsByAverageViews,
            &channels.top_channels_by_avg_views,
            limit,
            |c| {
                PanelLine::new(
                    c.channel.clone(),
                    format!("avg {} views", format_count(c.average_views)),
                )
            },
        ),
        Panel::build(
            PanelKind::UploadDays,
            time.upload_day_distribution.entries(),
            limit,
            |(day, count)| PanelLine::new(day.clone(), plural(*count, "video")),
        ),
        Panel::build(
            PanelKind::UploadHours,
            time.upload_hour_distribution.entries(),
            limit,
            |(hour, count)| PanelLine::new(format!("{hour}:00"), plural(*count, "video")),
        ),
        Panel::build(
            PanelKind::Sentiment,
            analysis.sentiment_analysis.entries(),
            limit,
            |(sentiment, count)| PanelLine::new(sentiment.clone(), plural(*count, "video")),
        ),
        Panel::build(
            PanelKind::TitlePatterns,
            analysis.title_pattern_analysis.entries(),
            limit,
            |(pattern, count)| PanelLine::new(pattern.clone(), plural(*count, "title")),
        ),
        Panel::build(
            PanelKind::Breakouts,
            &analysis.breakout_videos,
            limit,
            |v| {
                PanelLine::new(
                    truncate_title(&v.title, BREAKOUT_TITLE_CHARS),
                    format!(
                        "{} · {} views · {:.1}x reach",
                        v.channel,
                        format_count(v.view_count),
                        v.breakout_ratio
                    ),
                )
            },
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn plural(count: u64, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::Numbering;
    use shorts_types::{
        BreakoutVideo, ChannelAnalysis, ChannelAverageViews, ChannelVideoCount, Distribution,
        TimeAnalysis,
    };

    fn analysis() -> AnalysisAggregate {
        AnalysisAggregate {
            keyword_analysis: (0..12).map(|i| (format!("word{i}"), 20 - i)).collect(),
            channel_analysis: ChannelAnalysis {
                top_channels_by_video_count: vec![ChannelVideoCount {
                    channel: "Alpha".into(),
                    video_count: 1,
                }],
                top_channels_by_avg_views: vec![ChannelAverageViews {
                    channel: "Beta".into(),
                    average_views: 1_500_000,
                    video_count: 2,
                }],
            },
            time_analysis: TimeAnalysis {
                upload_hour_distribution: Distribution(vec![("18".into(), 3), ("9".into(), 1)]),
                upload_day_distribution: Distribution::default(),
            },
            breakout_videos: vec![BreakoutVideo {
                video_id: "b1".into(),
                title: "A breakout".into(),
                channel: "Gamma".into(),
                view_count: 2_000_000,
                subscriber_count: Some(1_000),
                breakout_ratio: 2000.0,
            }],
            ..AnalysisAggregate::default()
        }
    }

    #[test]
    fn empty_aggregates_are_skipped() {
        let panels = dashboard_panels(&analysis(), 5);
        let kinds: Vec<PanelKind> = panels.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            vec![
                PanelKind::Keywords,
                PanelKind::ChannelsByVideoCount,
                PanelKind::ChannelsByAverageViews,
                PanelKind::UploadHours,
                PanelKind::Breakouts,
            ]
        );
        assert!(dashboard_panels(&AnalysisAggregate::default(), 5).is_empty());
    }

    #[test]
    fn line_rendering() {
        let panels = dashboard_panels(&analysis(), 5);

        let keywords = &panels[0];
        assert!(keywords.has_more());
        assert_eq!(keywords.inline[0].rank, Some(1));
        assert_eq!(keywords.inline[0].detail, "20 times");
        assert_eq!(keywords.full().len(), 12);

        assert_eq!(panels[1].inline[0].detail, "1 video");
        assert_eq!(panels[2].inline[0].detail, "avg 1.5M views");

        let hours = &panels[3];
        assert_eq!(hours.numbering(), Numbering::Unordered);
        assert_eq!(hours.inline[0].label, "18:00");
        assert_eq!(hours.inline[0].detail, "3 videos");

        assert_eq!(
            panels[4].inline[0].detail,
            "Gamma · 2M views · 2000.0x reach"
        );
    }
}
