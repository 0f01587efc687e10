//! Plotting observer for visualizing trajectories.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use stride_core::{Observer, Trajectory};
use stride_solvers::transient::rk4;

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Pendulum").stacked())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    stacked: bool,
    x_label: String,
}

impl ShowConfig {
    /// Creates a new `ShowConfig`: no title, no legend, all traces on one
    /// plot, and an x axis labeled `t`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            stacked: false,
            x_label: "t".to_owned(),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Draws each trace on its own plot, stacked vertically and labeled by
    /// trace name, instead of overlaying them.
    #[must_use]
    pub fn stacked(mut self) -> Self {
        self.stacked = true;
        self
    }

    /// Sets the x axis label.
    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event entirely; return
/// `None` in a trace slot to skip that trace for the event.
///
/// [`rk4::Event`] implements this for any `N`: the x value is the event time
/// and trace `i` is state component `i`.
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    fn traces(&self) -> [Option<f64>; N];
}

impl<const N: usize> Plottable<N> for rk4::Event<'_> {
    fn x(&self) -> Option<f64> {
        Some(self.time)
    }

    fn traces(&self) -> [Option<f64>; N] {
        std::array::from_fn(|i| self.state.get(i))
    }
}

/// An observer that collects traces and displays them via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names, then fill it by either:
///
/// - **Observing**: pass `&mut PlotObserver` to [`rk4::solve`]; trace `i`
///   records state component `i` at each grid time.
/// - **Recording**: call [`record`][PlotObserver::record] from a closure
///   observer, e.g. to plot derived quantities or an exact solution alongside.
///
/// A finished [`Trajectory`] can be loaded directly with
/// [`from_trajectory`][PlotObserver::from_trajectory].
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["θ", "θ'"]);
/// rk4::solve(&pendulum, &initial, &grid, &mut obs)?;
/// obs.show(ShowConfig::new().title("Driven pendulum").stacked())?;
/// ```
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Creates a `PlotObserver` holding the first `N` components of a
    /// trajectory, each plotted against time.
    pub fn from_trajectory(trajectory: &Trajectory, names: [&str; N]) -> Self {
        let mut obs = Self::new(names);
        for (i, trace) in obs.data.iter_mut().enumerate() {
            trace.extend(trajectory.component(i).map(|(t, y)| [t, y]));
        }
        obs
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (trace, y) in self.data.iter_mut().zip(traces) {
            if let Some(y) = y {
                trace.push([x, y]);
            }
        }
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions::default();
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<(String, Vec<[f64; 2]>)> = self.names.into_iter().zip(self.data).collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| Ok(Box::new(PlotApp { traces, config }))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    config: ShowConfig,
}

impl PlotApp {
    fn overlaid(&self, ui: &mut egui::Ui) {
        let mut plot = Plot::new("plot_observer").x_axis_label(self.config.x_label.as_str());
        if self.config.legend {
            plot = plot.legend(Legend::default());
        }
        plot.show(ui, |plot_ui| {
            for (name, points) in &self.traces {
                let points: PlotPoints = points.iter().copied().collect();
                plot_ui.line(Line::new(points).name(name));
            }
        });
    }

    fn stacked(&self, ui: &mut egui::Ui) {
        #[allow(clippy::cast_precision_loss)]
        let height = ui.available_height() / self.traces.len().max(1) as f32;

        for (i, (name, points)) in self.traces.iter().enumerate() {
            let mut plot = Plot::new(("plot_observer", i))
                .height(height)
                .x_axis_label(self.config.x_label.as_str())
                .y_axis_label(name.as_str());
            if self.config.legend {
                plot = plot.legend(Legend::default());
            }
            plot.show(ui, |plot_ui| {
                let points: PlotPoints = points.iter().copied().collect();
                plot_ui.line(Line::new(points).name(name));
            });
        }
    }
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.config.stacked {
                self.stacked(ui);
            } else {
                self.overlaid(ui);
            }
        });
    }
}
