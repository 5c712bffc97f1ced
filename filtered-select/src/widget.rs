//! The widget: wires controls, adapters, pipelines, and outputs together.

use std::sync::{Arc, RwLock};

use brook::{Stream, Subject, Value};
use log::debug;

use crate::adapters;
use crate::config::SelectConfig;
use crate::controls::{BoundControls, ControlSet, FocusController, ListBox, ListEntry, TextBox};
use crate::error::SetupError;
use crate::filter::{filter_options, group_options};
use crate::options::{ChosenOption, FilteredOption, GroupedOptions, OptionItem, SelectOption};
use crate::{selection, visibility};

/// The searchable single-select widget.
///
/// Construction wires the full signal graph and runs the initial
/// empty-filter computation, so the complete option list is available before
/// any interaction. The graph uses timer combinators, so the widget must be
/// built inside a Tokio runtime.
///
/// The widget owns every stream it derives; dropping it drops the controls
/// and with them the whole graph.
///
/// # Example
///
/// ```ignore
/// let select = FilteredSelect::new(
///     [
///         ("BP", "Ben", "Parents"),
///         ("BP", "Benny", "Nicknames"),
///     ],
///     SelectConfig::default(),
/// )?;
///
/// select
///     .chosen_options()
///     .subscribe(|chosen| println!("picked {} ({})", chosen.text, chosen.id))
///     .detach();
/// ```
pub struct FilteredSelect {
    config: SelectConfig,
    options: Arc<RwLock<Vec<SelectOption>>>,
    refresh: Subject<String>,
    filter_text: Value<String>,
    list_focused: Value<bool>,
    filtered: Value<Vec<FilteredOption>>,
    grouped: Value<Vec<GroupedOptions>>,
    active: Value<bool>,
    chosen: Stream<ChosenOption>,
    chosen_text: Value<String>,
    controls: BoundControls,
}

impl FilteredSelect {
    /// Build a widget over headless controls.
    pub fn new<I, O>(options: I, config: SelectConfig) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = O>,
        O: OptionItem,
    {
        Self::bind(ControlSet::headless(), options, config)
    }

    /// Bind a widget to the controls a rendering layer provides.
    pub fn bind<I, O>(
        controls: ControlSet,
        options: I,
        config: SelectConfig,
    ) -> Result<Self, SetupError>
    where
        I: IntoIterator<Item = O>,
        O: OptionItem,
    {
        let controls = controls.into_bound()?;
        let adapters = adapters::build(&controls, &config.timings);

        let options: Arc<RwLock<Vec<SelectOption>>> = Arc::new(RwLock::new(
            options
                .into_iter()
                .map(|option| option.to_select_option())
                .collect(),
        ));

        // Recompute requests: every settled filter-text change, plus option
        // set replacements re-running the current filter.
        let refresh = Subject::<String>::new();
        {
            let refresh = refresh.clone();
            adapters
                .filter_text
                .changes()
                .subscribe(move |query: &String| refresh.emit(query.clone()))
                .detach();
        }

        let compute = {
            let options = Arc::clone(&options);
            move |query: &String| {
                let guard = match options.read() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                let view = filter_options(&guard, query);
                debug!("filter {query:?}: {} of {} options", view.len(), guard.len());
                view
            }
        };
        let initial = compute(&adapters.filter_text.get());
        let filtered = refresh.stream().map(compute).hold(initial);
        let grouped = filtered.map(|view: &Vec<FilteredOption>| group_options(view));

        // Keep the list box mirroring the filtered view; replacing the
        // entries resets the highlight to the first (the selected) entry.
        let sync_entries = {
            let select_box = controls.select_box.clone();
            move |view: &Vec<FilteredOption>| {
                select_box.set_entries(
                    view.iter()
                        .map(|entry| ListEntry {
                            text: entry.option.text.clone(),
                            value: entry.option.id.clone(),
                        })
                        .collect(),
                );
            }
        };
        sync_entries(&filtered.get());
        filtered.changes().subscribe(sync_entries).detach();

        let chosen = selection::build(&controls);
        let chosen_text = chosen
            .map(|chosen: &ChosenOption| chosen.text.clone())
            .hold(String::new());
        {
            let fake_input = controls.fake_input.clone();
            chosen
                .subscribe(move |chosen: &ChosenOption| fake_input.set_value(chosen.text.clone()))
                .detach();
        }

        let active = visibility::build(
            &adapters.decoy_interacted,
            &adapters.filter_blur_resolved,
            &controls.select_box.blur_events(),
            &chosen,
        );

        Ok(Self {
            config,
            options,
            refresh,
            filter_text: adapters.filter_text,
            list_focused: adapters.list_focused,
            filtered,
            grouped,
            active,
            chosen,
            chosen_text,
            controls,
        })
    }

    /// Replace the option set and re-run the filter with the current text.
    pub fn set_options<I, O>(&self, options: I)
    where
        I: IntoIterator<Item = O>,
        O: OptionItem,
    {
        let replacement: Vec<SelectOption> = options
            .into_iter()
            .map(|option| option.to_select_option())
            .collect();
        match self.options.write() {
            Ok(mut guard) => *guard = replacement,
            Err(poisoned) => *poisoned.into_inner() = replacement,
        }
        self.refresh.emit(self.filter_text.get());
    }

    // -------------------------------------------------------------------------
    // Derived outputs for the rendering layer
    // -------------------------------------------------------------------------

    /// The filtered, sorted option view.
    pub fn filtered_options(&self) -> Value<Vec<FilteredOption>> {
        self.filtered.clone()
    }

    /// The filtered view partitioned by group.
    pub fn grouped_options(&self) -> Value<Vec<GroupedOptions>> {
        self.grouped.clone()
    }

    /// Whether the dropdown is open. Initially closed.
    pub fn active(&self) -> Value<bool> {
        self.active.clone()
    }

    /// The text the decoy box should display. Initially empty.
    pub fn chosen_text(&self) -> Value<String> {
        self.chosen_text.clone()
    }

    /// The outward "option chosen" events.
    pub fn chosen_options(&self) -> Stream<ChosenOption> {
        self.chosen.clone()
    }

    /// The settled filter text driving the current view.
    pub fn filter_text(&self) -> Value<String> {
        self.filter_text.clone()
    }

    /// The list box's focus state.
    pub fn list_focused(&self) -> Value<bool> {
        self.list_focused.clone()
    }

    // -------------------------------------------------------------------------
    // Controls, for the host routing raw events in
    // -------------------------------------------------------------------------

    /// The filter text box.
    pub fn filter_input(&self) -> &TextBox {
        &self.controls.filter_input
    }

    /// The list box.
    pub fn select_box(&self) -> &ListBox {
        &self.controls.select_box
    }

    /// The decoy display box.
    pub fn fake_input(&self) -> &TextBox {
        &self.controls.fake_input
    }

    /// The focus controller spanning the three controls.
    pub fn focus(&self) -> &FocusController {
        &self.controls.focus
    }

    /// The widget's configuration.
    pub fn config(&self) -> &SelectConfig {
        &self.config
    }
}
