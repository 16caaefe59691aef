//! Display surfaces that present a [`Figure`].
//!
//! `TerminalSurface` rasterizes each subplot with a trueno-viz `LossCurve`
//! and encodes it for the terminal. `NullSurface` discards redraws.

use std::io::{Stdout, Write};

use trueno_viz::output::{TerminalEncoder, TerminalMode as TruenoTerminalMode};
use trueno_viz::plots::{LossCurve, MetricSeries};
use trueno_viz::prelude::{Rgba, WithDimensions};

use super::capability::TerminalMode;
use super::figure::{Figure, Subplot};
use crate::error::{PlotterError, Result};
use crate::train::meter::MetricGoal;

/// Move the cursor home and clear the screen.
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Something a figure can be drawn on.
pub trait PlotSurface {
    /// Replace whatever was shown before with `figure`.
    fn present(&mut self, figure: &Figure) -> Result<()>;
}

impl<S: PlotSurface + ?Sized> PlotSurface for Box<S> {
    fn present(&mut self, figure: &Figure) -> Result<()> {
        (**self).present(figure)
    }
}

/// Surface that draws nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl PlotSurface for NullSurface {
    fn present(&mut self, _figure: &Figure) -> Result<()> {
        Ok(())
    }
}

/// Terminal surface redrawing every subplot in place.
#[derive(Debug)]
pub struct TerminalSurface<W: Write = Stdout> {
    out: W,
    width: u32,
    height: u32,
    pub(crate) mode: TerminalMode,
}

impl TerminalSurface<Stdout> {
    /// Surface writing to stdout.
    pub fn stdout(width: u32, height: u32) -> Self {
        Self::new(std::io::stdout(), width, height)
    }
}

impl<W: Write> TerminalSurface<W> {
    /// Surface writing to any sink.
    pub fn new(out: W, width: u32, height: u32) -> Self {
        Self {
            out,
            width,
            height,
            mode: TerminalMode::Unicode,
        }
    }

    /// Set terminal rendering mode.
    pub fn terminal_mode(mut self, mode: TerminalMode) -> Self {
        self.mode = mode;
        self
    }

    /// Consume the surface, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render one subplot to terminal text.
    fn render_subplot(&self, subplot: &Subplot) -> Result<String> {
        let mut curve = LossCurve::new()
            .add_series(MetricSeries::new("Train", Rgba::rgb(66, 133, 244)))
            .add_series(MetricSeries::new("Val", Rgba::rgb(255, 128, 0)))
            .dimensions(self.width, self.height)
            .margin(2)
            .best_markers(true)
            .lower_is_better(MetricGoal::for_metric(&subplot.metric).lower_is_better())
            .build()
            .map_err(|e| PlotterError::render(format!("{e:?}")))?;

        for (train, val) in aligned_points(subplot) {
            curve.push(0, train);
            if let Some(val) = val {
                curve.push(1, val);
            }
        }

        if curve.max_epochs() < 2 {
            return Ok(String::from("(waiting for data...)"));
        }

        let fb = match curve.to_framebuffer() {
            Ok(fb) => fb,
            Err(_) => return Err(PlotterError::render(format!("rasterizing {}", subplot.metric))),
        };

        let trueno_mode = match self.mode {
            TerminalMode::Ascii => TruenoTerminalMode::Ascii,
            TerminalMode::Unicode => TruenoTerminalMode::UnicodeHalfBlock,
            TerminalMode::Ansi => TruenoTerminalMode::AnsiTrueColor,
        };

        let encoder = TerminalEncoder::new()
            .mode(trueno_mode)
            .width(self.width)
            .height(self.height / 2); // Terminal chars are ~2:1 aspect

        Ok(encoder.render(&fb))
    }
}

/// Per-step (train, val) pairs, dropping any step where a present value is
/// not finite so both curves stay on the same x positions.
fn aligned_points(subplot: &Subplot) -> Vec<(f32, Option<f32>)> {
    let Some(train) = subplot.lines.first() else {
        return Vec::new();
    };
    let val = subplot.lines.get(1);

    train
        .values
        .iter()
        .enumerate()
        .filter_map(|(step, &t)| {
            let v = val.and_then(|line| line.values.get(step).copied());
            (t.is_finite() && v.is_none_or(f32::is_finite)).then_some((t, v))
        })
        .collect()
}

/// Title row for a subplot: metric name, then each line's latest value.
fn legend(subplot: &Subplot) -> String {
    let entries: Vec<String> = subplot
        .lines
        .iter()
        .map(|line| match line.values.last() {
            Some(v) => format!("{}={v:.4}", line.label),
            None => line.label.clone(),
        })
        .collect();
    format!("── {} ── {}", subplot.metric, entries.join(" │ "))
}

impl<W: Write> PlotSurface for TerminalSurface<W> {
    fn present(&mut self, figure: &Figure) -> Result<()> {
        let mut frame = String::from(CLEAR_SCREEN);
        if let (Some(first), Some(last)) = (figure.x.first(), figure.x.last()) {
            frame.push_str(&format!("Evaluation steps {first}..{last}\n"));
        }

        for subplot in &figure.subplots {
            frame.push_str(&legend(subplot));
            frame.push('\n');
            frame.push_str(&self.render_subplot(subplot)?);
            frame.push('\n');
        }

        self.out
            .write_all(frame.as_bytes())
            .map_err(|e| PlotterError::io("writing chart", e))?;
        self.out.flush().map_err(|e| PlotterError::io("flushing chart", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::train::tui::figure::Line;

    fn figure(points: usize, with_validation: bool) -> Figure {
        let train: Vec<f32> = (0..points).map(|i| 1.0 - i as f32 * 0.05).collect();
        let mut lines = vec![Line {
            label: "loss".into(),
            values: train.clone(),
        }];
        if with_validation {
            lines.push(Line {
                label: "val_loss".into(),
                values: train.iter().map(|v| v + 0.1).collect(),
            });
        }
        Figure {
            x: (1..=points).collect(),
            subplots: vec![Subplot {
                metric: "loss".into(),
                lines,
            }],
        }
    }

    fn render(figure: &Figure, mode: TerminalMode) -> String {
        let mut surface = TerminalSurface::new(Vec::new(), 80, 20).terminal_mode(mode);
        surface.present(figure).unwrap();
        String::from_utf8(surface.into_inner()).unwrap()
    }

    #[test]
    fn test_terminal_surface_new() {
        let surface = TerminalSurface::new(Vec::<u8>::new(), 80, 20);
        assert_eq!(surface.width, 80);
        assert_eq!(surface.height, 20);
        assert_eq!(surface.mode, TerminalMode::Unicode);
    }

    #[test]
    fn test_present_clears_screen_and_titles() {
        let output = render(&figure(3, true), TerminalMode::Unicode);
        assert!(output.starts_with(CLEAR_SCREEN));
        assert!(output.contains("Evaluation steps 1..3"));
        assert!(output.contains("── loss ── loss="));
        assert!(output.contains("val_loss="));
    }

    #[test]
    fn test_present_insufficient_data() {
        let output = render(&figure(1, false), TerminalMode::Unicode);
        assert!(output.contains("waiting for data"));
    }

    #[test]
    fn test_present_with_data_all_modes() {
        for mode in [TerminalMode::Ascii, TerminalMode::Unicode, TerminalMode::Ansi] {
            let output = render(&figure(10, true), mode);
            assert!(!output.contains("waiting for data"));
        }
    }

    #[test]
    fn test_aligned_points_drop_whole_step() {
        let subplot = Subplot {
            metric: "loss".into(),
            lines: vec![
                Line {
                    label: "loss".into(),
                    values: vec![1.0, f32::NAN, 0.6, 0.5],
                },
                Line {
                    label: "val_loss".into(),
                    values: vec![1.1, 0.9, f32::INFINITY, 0.55],
                },
            ],
        };
        assert_eq!(
            aligned_points(&subplot),
            vec![(1.0, Some(1.1)), (0.5, Some(0.55))]
        );
    }

    #[test]
    fn test_aligned_points_train_only() {
        let subplot = Subplot {
            metric: "loss".into(),
            lines: vec![Line {
                label: "loss".into(),
                values: vec![0.9, f32::NAN, 0.7],
            }],
        };
        assert_eq!(aligned_points(&subplot), vec![(0.9, None), (0.7, None)]);
    }

    #[test]
    fn test_legend_without_values() {
        let subplot = Subplot {
            metric: "loss".into(),
            lines: vec![Line {
                label: "loss".into(),
                values: vec![],
            }],
        };
        assert_eq!(legend(&subplot), "── loss ── loss");
    }

    #[test]
    fn test_null_surface() {
        assert!(NullSurface.present(&figure(5, true)).is_ok());
    }

    #[test]
    fn test_boxed_surface() {
        let mut surface: Box<dyn PlotSurface> = Box::new(NullSurface);
        assert!(surface.present(&figure(2, false)).is_ok());
    }
}
