//! Form state controller.
//!
//! `FormController` owns the consistency rules of the subset request form:
//! numeric limit clamping, bounding box ordering, dataset → time range
//! population, coupled start/end selectors, sub-form visibility, and
//! submit-time validation. It talks to the page only through [`FormView`]
//! and to the server only through [`DataApi`].
//!
//! The host wires its change events to the `on_*` methods and calls
//! [`FormController::initialize`] once the view exists.

use crate::api::DataApi;
use crate::bounds::{
    adjust_bounds, parse_field_value, BoundingBox, BoundingBoxField, NumericField, PointField,
};
use crate::config::FormConfig;
use crate::error::SubsetError;
use crate::request::{validate_submission, RequestArea, SubsetRequest};
use crate::selection::{DateSelectionPair, Panel, RegionSubMode, SpatialSelectionMode};
use crate::view::FormView;
use log::{debug, error, info, warn};
use std::cell::{Cell, RefCell};

pub const LOADING_TIMES_MESSAGE: &str = "Loading available times...";
pub const TIMES_FAILED_MESSAGE: &str =
    "Could not contact the data server to load available times. Please try again later.";
pub const NO_TIMES_MESSAGE: &str = "No times are available for this dataset.";

pub struct FormController<V, A> {
    view: V,
    api: A,
    config: FormConfig,
    selection: RefCell<Option<DateSelectionPair>>,
    // Ticket of the latest time range request; older responses are dropped.
    times_ticket: Cell<u64>,
}

impl<V: FormView, A: DataApi> FormController<V, A> {
    pub fn new(view: V, api: A, config: FormConfig) -> Self {
        FormController {
            view,
            api,
            config,
            selection: RefCell::new(None),
            times_ticket: Cell::new(0),
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Current start/end selection, if times are loaded.
    pub fn selection(&self) -> Option<DateSelectionPair> {
        self.selection.borrow().clone()
    }

    /// Bring the form to its working state.
    ///
    /// Visibility is taken from the radio buttons as they are now, since a
    /// back-navigation can restore a checked radio without a change event.
    /// Datasets and countries are then fetched concurrently; the dataset list
    /// chains into the time range of the initial dataset.
    pub async fn initialize(&self) {
        self.set_spatial_mode(self.view.checked_spatial_mode());
        self.set_region_sub_mode(self.view.checked_region_sub_mode());
        futures::join!(self.populate_datasets(), self.populate_countries());
    }

    /// Change handler of the four bounding box inputs.
    pub fn on_bounds_changed(&self, field: BoundingBoxField) {
        let edited_field = NumericField::from(field);
        let Some(value) = self.read_field(edited_field) else {
            return;
        };
        let limits = self.view.field_limits(edited_field);
        let counterpart_field = NumericField::from(field.counterpart());
        let Some(counterpart_value) = self.read_field(counterpart_field) else {
            self.write_if_changed(edited_field, value, limits.clamp_to_limits(value));
            return;
        };
        let adjustment = adjust_bounds(
            field,
            value,
            limits,
            counterpart_value,
            self.view.field_limits(counterpart_field),
        );
        self.write_if_changed(edited_field, value, adjustment.edited);
        if let Some(pushed) = adjustment.counterpart {
            debug!(
                "{:?} pushed to {} after {:?} set to {}",
                field.counterpart(),
                pushed,
                field,
                adjustment.edited
            );
            self.view.set_field_value(counterpart_field, pushed);
        }
    }

    /// Change handler of the point lat/lon inputs.
    pub fn on_point_changed(&self, field: PointField) {
        let field = NumericField::from(field);
        if let Some(value) = self.read_field(field) {
            let clamped = self.view.field_limits(field).clamp_to_limits(value);
            self.write_if_changed(field, value, clamped);
        }
    }

    fn read_field(&self, field: NumericField) -> Option<f64> {
        let text = self.view.field_text(field);
        let value = parse_field_value(&text);
        if value.is_none() {
            debug!("Ignoring non-numeric {} value {:?}", field.element_id(), text);
        }
        value
    }

    fn write_if_changed(&self, field: NumericField, old: f64, new: f64) {
        if old != new {
            self.view.set_field_value(field, new);
        }
    }

    /// Fetch the dataset list and, when anything is loaded, show the subset
    /// selection and populate times for the initially selected dataset.
    pub async fn populate_datasets(&self) {
        let datasets = match self.api.datasets().await {
            Ok(datasets) => datasets,
            Err(e) => {
                error!(
                    "Problem getting list of available datasets, the server may be down: {}",
                    e
                );
                return;
            }
        };
        let Some(first) = datasets.first() else {
            warn!("No datasets are loaded on the server yet");
            return;
        };
        info!("Loaded {} datasets", datasets.len());
        let first_id = first.id.clone();
        self.view.set_dataset_options(&datasets);
        self.view.set_visible(Panel::NotLoadedLabel, false);
        self.view.set_visible(Panel::SubsetSelection, true);
        let initial = self.view.selected_dataset().unwrap_or(first_id);
        self.populate_times(&initial).await;
    }

    /// Change handler of the dataset selector.
    pub async fn on_dataset_changed(&self, dataset: &str) {
        self.populate_times(dataset).await;
    }

    /// Fetch the time range of a dataset and fill the start/end selectors
    /// with one option per month.
    pub async fn populate_times(&self, dataset: &str) {
        let ticket = self.times_ticket.get() + 1;
        self.times_ticket.set(ticket);
        self.selection.replace(None);
        self.view.show_times_message(LOADING_TIMES_MESSAGE);

        let result = self.api.times(dataset).await;
        if self.times_ticket.get() != ticket {
            debug!("Dropping stale time range response for {}", dataset);
            return;
        }

        match result {
            Ok(range) => match DateSelectionPair::new(range.month_options()) {
                Some(pair) => {
                    info!(
                        "{} has {} months available ({} to {})",
                        dataset,
                        pair.options().len(),
                        pair.start().label,
                        pair.end().label
                    );
                    self.view.show_time_selectors(&pair);
                    self.selection.replace(Some(pair));
                }
                None => {
                    let e = SubsetError::EmptyTimeRange {
                        start: range.start.to_rfc3339(),
                        end: range.end.to_rfc3339(),
                    };
                    warn!("{}: {}", dataset, e);
                    self.view.show_times_message(NO_TIMES_MESSAGE);
                }
            },
            Err(SubsetError::Unavailable { dataset, status }) => {
                // Most likely the server has only just started.
                info!(
                    "Dataset {} not loaded on the server yet (status {})",
                    dataset, status
                );
                self.view.set_visible(Panel::Form, false);
                self.view.set_visible(Panel::NotLoaded, true);
            }
            Err(e) => {
                error!("Problem getting available times for {}: {}", dataset, e);
                self.view.show_times_message(TIMES_FAILED_MESSAGE);
            }
        }
    }

    /// Change handler of the start selector.
    pub fn on_start_selected(&self, index: usize) {
        if let Some(pair) = self.selection.borrow_mut().as_mut() {
            pair.select_start(index);
            self.view.show_time_selectors(pair);
        }
    }

    /// Change handler of the end selector.
    pub fn on_end_selected(&self, index: usize) {
        if let Some(pair) = self.selection.borrow_mut().as_mut() {
            pair.select_end(index);
            self.view.show_time_selectors(pair);
        }
    }

    /// Fetch the country list once and fill the country selector.
    pub async fn populate_countries(&self) {
        match self.api.countries().await {
            Ok(countries) => {
                info!("Loaded {} countries", countries.len());
                self.view.set_country_options(&countries);
            }
            Err(e) => error!("Problem getting list of countries: {}", e),
        }
    }

    /// Show the point or the region sub-form.
    pub fn set_spatial_mode(&self, mode: SpatialSelectionMode) {
        let point = mode == SpatialSelectionMode::Point;
        self.view.set_visible(Panel::PointSelection, point);
        self.view.set_visible(Panel::RegionSelection, !point);
    }

    /// Show the bounding box panel only for bounds selection.
    pub fn set_region_sub_mode(&self, mode: RegionSubMode) {
        self.view
            .set_visible(Panel::Bounds, mode == RegionSubMode::Bounds);
    }

    /// Check the contact fields before the form is posted. Returns false and
    /// alerts the user when the submission must be blocked.
    pub fn validate_submission(&self) -> bool {
        match validate_submission(
            &self.view.email(),
            &self.view.job_reference(),
            self.config.require_reference,
        ) {
            Ok(()) => true,
            Err(e) => {
                self.view.alert(&e.to_string());
                false
            }
        }
    }

    /// The job the form would post right now, if a dataset and a time range
    /// are selected and the spatial inputs parse.
    pub fn subset_request(&self) -> Option<SubsetRequest> {
        let dataset = self.view.selected_dataset()?;
        let (start_time, end_time) = {
            let selection = self.selection.borrow();
            let pair = selection.as_ref()?;
            (pair.start().timestamp.clone(), pair.end().timestamp.clone())
        };
        let value = |field: NumericField| parse_field_value(&self.view.field_text(field));
        let area = match self.view.checked_spatial_mode() {
            SpatialSelectionMode::Point => RequestArea::Point {
                lat: value(PointField::Lat.into())?,
                lon: value(PointField::Lon.into())?,
            },
            SpatialSelectionMode::Region => match self.view.checked_region_sub_mode() {
                RegionSubMode::NamedCountry => RequestArea::Country {
                    region_id: self.view.selected_country()?,
                },
                RegionSubMode::Bounds => RequestArea::Bounds(BoundingBox {
                    min_lat: value(BoundingBoxField::MinLat.into())?,
                    max_lat: value(BoundingBoxField::MaxLat.into())?,
                    min_lon: value(BoundingBoxField::MinLon.into())?,
                    max_lon: value(BoundingBoxField::MaxLon.into())?,
                }),
            },
        };
        Some(SubsetRequest {
            dataset,
            area,
            start_time,
            end_time,
            email: self.view.email(),
            reference: self.view.job_reference(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Limits;
    use crate::catalog::{CountryOption, DatasetOption};
    use crate::error::Result;
    use crate::months::TimeRange;
    use futures::channel::oneshot;
    use std::collections::{HashMap, HashSet};

    struct MockView {
        fields: RefCell<HashMap<NumericField, String>>,
        config: FormConfig,
        email: RefCell<String>,
        reference: RefCell<String>,
        datasets: RefCell<Vec<DatasetOption>>,
        selected_dataset: RefCell<Option<String>>,
        times_message: RefCell<Option<String>>,
        time_selectors: RefCell<Option<DateSelectionPair>>,
        countries: RefCell<Vec<CountryOption>>,
        spatial_mode: Cell<SpatialSelectionMode>,
        region_sub_mode: Cell<RegionSubMode>,
        visible: RefCell<HashSet<Panel>>,
        alerts: RefCell<Vec<String>>,
    }

    impl MockView {
        /// The page as served: form and "not loaded" label visible.
        fn new() -> Self {
            let fields = [
                (NumericField::from(BoundingBoxField::MinLat), "-10"),
                (BoundingBoxField::MaxLat.into(), "10"),
                (BoundingBoxField::MinLon.into(), "20"),
                (BoundingBoxField::MaxLon.into(), "40"),
                (PointField::Lat.into(), "0"),
                (PointField::Lon.into(), "30"),
            ]
            .into_iter()
            .map(|(f, v)| (f, v.to_string()))
            .collect();
            MockView {
                fields: RefCell::new(fields),
                config: FormConfig::default(),
                email: RefCell::new(String::new()),
                reference: RefCell::new(String::new()),
                datasets: RefCell::new(Vec::new()),
                selected_dataset: RefCell::new(None),
                times_message: RefCell::new(None),
                time_selectors: RefCell::new(None),
                countries: RefCell::new(Vec::new()),
                spatial_mode: Cell::new(SpatialSelectionMode::Point),
                region_sub_mode: Cell::new(RegionSubMode::NamedCountry),
                visible: RefCell::new(HashSet::from([
                    Panel::Form,
                    Panel::NotLoadedLabel,
                    Panel::PointSelection,
                ])),
                alerts: RefCell::new(Vec::new()),
            }
        }

        fn type_into(&self, field: impl Into<NumericField>, text: &str) {
            self.fields
                .borrow_mut()
                .insert(field.into(), text.to_string());
        }

        fn value(&self, field: impl Into<NumericField>) -> f64 {
            self.fields.borrow()[&field.into()].parse().unwrap()
        }

        fn is_visible(&self, panel: Panel) -> bool {
            self.visible.borrow().contains(&panel)
        }

        fn labels(&self) -> Vec<String> {
            self.time_selectors
                .borrow()
                .as_ref()
                .map(|p| p.options().iter().map(|o| o.label.clone()).collect())
                .unwrap_or_default()
        }
    }

    impl FormView for MockView {
        fn field_text(&self, field: NumericField) -> String {
            self.fields.borrow()[&field].clone()
        }
        fn set_field_value(&self, field: NumericField, value: f64) {
            self.fields.borrow_mut().insert(field, value.to_string());
        }
        fn field_limits(&self, field: NumericField) -> Limits {
            self.config.limits_for(field.is_latitude())
        }
        fn email(&self) -> String {
            self.email.borrow().clone()
        }
        fn job_reference(&self) -> String {
            self.reference.borrow().clone()
        }
        fn set_dataset_options(&self, datasets: &[DatasetOption]) {
            self.datasets.replace(datasets.to_vec());
            // A select element selects its first option.
            if self.selected_dataset.borrow().is_none() {
                self.selected_dataset
                    .replace(datasets.first().map(|d| d.id.clone()));
            }
        }
        fn selected_dataset(&self) -> Option<String> {
            self.selected_dataset.borrow().clone()
        }
        fn show_times_message(&self, message: &str) {
            self.times_message.replace(Some(message.to_string()));
            self.time_selectors.replace(None);
        }
        fn show_time_selectors(&self, selection: &DateSelectionPair) {
            self.times_message.replace(None);
            self.time_selectors.replace(Some(selection.clone()));
        }
        fn set_country_options(&self, countries: &[CountryOption]) {
            self.countries.replace(countries.to_vec());
        }
        fn selected_country(&self) -> Option<String> {
            self.countries.borrow().first().map(|c| c.region_id.clone())
        }
        fn checked_spatial_mode(&self) -> SpatialSelectionMode {
            self.spatial_mode.get()
        }
        fn checked_region_sub_mode(&self) -> RegionSubMode {
            self.region_sub_mode.get()
        }
        fn set_visible(&self, panel: Panel, visible: bool) {
            if visible {
                self.visible.borrow_mut().insert(panel);
            } else {
                self.visible.borrow_mut().remove(&panel);
            }
        }
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }
    }

    #[derive(Clone)]
    enum Reply {
        Body(&'static str),
        Status(u16),
        Transport,
    }

    struct ScriptedApi {
        datasets: Reply,
        countries: Reply,
        times: HashMap<&'static str, Reply>,
        gates: RefCell<HashMap<String, oneshot::Receiver<()>>>,
        time_requests: RefCell<Vec<String>>,
    }

    impl ScriptedApi {
        fn new() -> Self {
            ScriptedApi {
                datasets: Reply::Body(r#"[{"rfe": "Rainfall estimates"}, {"sm": "Soil moisture"}]"#),
                countries: Reply::Body(r#"{"Uganda": "UGA", "Chad": "TCD", "Mali": "MLI"}"#),
                times: HashMap::from([
                    (
                        "rfe",
                        Reply::Body(r#"{"starttime":"2020-01-15","endtime":"2020-03-02"}"#),
                    ),
                    (
                        "sm",
                        Reply::Body(
                            r#"{"starttime":"2021-01-01T00:00:00.000Z","endtime":"2021-06-30T00:00:00.000Z"}"#,
                        ),
                    ),
                ]),
                gates: RefCell::new(HashMap::new()),
                time_requests: RefCell::new(Vec::new()),
            }
        }

        /// Hold the GETTIMES response for `dataset` until the sender fires.
        fn gate(&self, dataset: &str) -> oneshot::Sender<()> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().insert(dataset.to_string(), rx);
            tx
        }

        fn body(reply: &Reply, request: &str) -> Result<&'static str> {
            match reply {
                Reply::Body(body) => Ok(body),
                Reply::Status(status) => Err(SubsetError::Status {
                    request: request.to_string(),
                    status: *status,
                }),
                Reply::Transport => Err(SubsetError::Transport("connection refused".to_string())),
            }
        }
    }

    impl DataApi for ScriptedApi {
        async fn datasets(&self) -> Result<Vec<DatasetOption>> {
            DatasetOption::parse_list(Self::body(&self.datasets, "GETDATASETS")?)
        }

        async fn times(&self, dataset: &str) -> Result<TimeRange> {
            self.time_requests.borrow_mut().push(dataset.to_string());
            let gate = self.gates.borrow_mut().remove(dataset);
            if let Some(rx) = gate {
                let _ = rx.await;
            }
            match self.times.get(dataset).cloned().unwrap_or(Reply::Status(500)) {
                Reply::Status(status) => Err(SubsetError::Unavailable {
                    dataset: dataset.to_string(),
                    status,
                }),
                reply => TimeRange::from_json(Self::body(&reply, "GETTIMES")?),
            }
        }

        async fn countries(&self) -> Result<Vec<CountryOption>> {
            CountryOption::parse_list(Self::body(&self.countries, "GETCOUNTRIES")?)
        }
    }

    fn controller(api: ScriptedApi) -> FormController<MockView, ScriptedApi> {
        FormController::new(MockView::new(), api, FormConfig::default())
    }

    #[test]
    fn test_min_lat_above_max_pushes_max() {
        let c = controller(ScriptedApi::new());
        c.view().type_into(BoundingBoxField::MinLat, "15");
        c.on_bounds_changed(BoundingBoxField::MinLat);
        assert_eq!(c.view().value(BoundingBoxField::MinLat), 15.0);
        assert_eq!(c.view().value(BoundingBoxField::MaxLat), 16.0);
    }

    #[test]
    fn test_max_lon_below_min_pushes_min() {
        let c = controller(ScriptedApi::new());
        c.view().type_into(BoundingBoxField::MaxLon, "5");
        c.on_bounds_changed(BoundingBoxField::MaxLon);
        assert_eq!(c.view().value(BoundingBoxField::MaxLon), 5.0);
        assert_eq!(c.view().value(BoundingBoxField::MinLon), 4.0);
        // The latitude axis is independent.
        assert_eq!(c.view().value(BoundingBoxField::MinLat), -10.0);
        assert_eq!(c.view().value(BoundingBoxField::MaxLat), 10.0);
    }

    #[test]
    fn test_bounds_clamped_then_coupled() {
        let c = controller(ScriptedApi::new());
        c.view().type_into(BoundingBoxField::MaxLat, "-200");
        c.on_bounds_changed(BoundingBoxField::MaxLat);
        assert_eq!(c.view().value(BoundingBoxField::MaxLat), -90.0);
        assert_eq!(c.view().value(BoundingBoxField::MinLat), -90.0);
    }

    #[test]
    fn test_bounds_ordering_holds_after_any_edit() {
        let c = controller(ScriptedApi::new());
        for (field, text) in [
            (BoundingBoxField::MinLat, "45"),
            (BoundingBoxField::MaxLat, "-60"),
            (BoundingBoxField::MinLon, "179.5"),
            (BoundingBoxField::MaxLon, "-400"),
            (BoundingBoxField::MinLat, "89.9"),
        ] {
            c.view().type_into(field, text);
            c.on_bounds_changed(field);
            let v = c.view();
            assert!(v.value(BoundingBoxField::MinLat) <= v.value(BoundingBoxField::MaxLat));
            assert!(v.value(BoundingBoxField::MinLon) <= v.value(BoundingBoxField::MaxLon));
            for f in BoundingBoxField::ALL {
                let limits = v.field_limits(f.into());
                assert!(limits.contains(v.value(f)), "{:?} out of limits", f);
            }
        }
    }

    #[test]
    fn test_non_numeric_input_left_alone() {
        let c = controller(ScriptedApi::new());
        c.view().type_into(BoundingBoxField::MinLat, "abc");
        c.on_bounds_changed(BoundingBoxField::MinLat);
        assert_eq!(c.view().field_text(BoundingBoxField::MinLat.into()), "abc");
        assert_eq!(c.view().value(BoundingBoxField::MaxLat), 10.0);
    }

    #[test]
    fn test_point_fields_clamped_independently() {
        let c = controller(ScriptedApi::new());
        c.view().type_into(PointField::Lon, "181");
        c.on_point_changed(PointField::Lon);
        assert_eq!(c.view().value(PointField::Lon), 180.0);
        assert_eq!(c.view().value(PointField::Lat), 0.0);

        c.view().type_into(PointField::Lat, "-95");
        c.on_point_changed(PointField::Lat);
        assert_eq!(c.view().value(PointField::Lat), -90.0);
        assert_eq!(c.view().value(PointField::Lon), 180.0);
    }

    #[tokio::test]
    async fn test_initialize_populates_everything() {
        let c = controller(ScriptedApi::new());
        c.initialize().await;
        let v = c.view();
        let ids: Vec<String> = v.datasets.borrow().iter().map(|d| d.id.clone()).collect();
        assert_eq!(ids, vec!["rfe", "sm"]);
        assert!(!v.is_visible(Panel::NotLoadedLabel));
        assert!(v.is_visible(Panel::SubsetSelection));
        assert_eq!(v.labels(), vec!["1/2020", "2/2020", "3/2020"]);
        let names: Vec<String> = v.countries.borrow().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["Chad", "Mali", "Uganda"]);
        assert_eq!(*c.api.time_requests.borrow(), vec!["rfe".to_string()]);
    }

    #[tokio::test]
    async fn test_times_default_to_full_range() {
        let c = controller(ScriptedApi::new());
        c.populate_times("rfe").await;
        let selection = c.selection().unwrap();
        assert_eq!(selection.start_index(), 0);
        assert_eq!(selection.end().label, "3/2020");
        assert_eq!(*c.view().time_selectors.borrow(), Some(selection));
        assert_eq!(*c.view().times_message.borrow(), None);
    }

    #[tokio::test]
    async fn test_empty_dataset_list_keeps_not_loaded_label() {
        let mut api = ScriptedApi::new();
        api.datasets = Reply::Body("[]");
        let c = controller(api);
        c.initialize().await;
        let v = c.view();
        assert!(v.datasets.borrow().is_empty());
        assert!(v.is_visible(Panel::NotLoadedLabel));
        assert!(!v.is_visible(Panel::SubsetSelection));
        assert!(c.api.time_requests.borrow().is_empty());
        // Countries still load.
        assert_eq!(v.countries.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_dataset_transport_failure_changes_nothing() {
        let mut api = ScriptedApi::new();
        api.datasets = Reply::Transport;
        let c = controller(api);
        c.initialize().await;
        assert!(c.view().is_visible(Panel::NotLoadedLabel));
        assert!(c.view().is_visible(Panel::Form));
        assert!(c.view().datasets.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_dataset_error_status_changes_nothing() {
        let mut api = ScriptedApi::new();
        api.datasets = Reply::Status(503);
        let c = controller(api);
        c.initialize().await;
        let v = c.view();
        assert!(v.is_visible(Panel::NotLoadedLabel));
        assert!(v.is_visible(Panel::Form));
        assert!(!v.is_visible(Panel::SubsetSelection));
        assert!(v.datasets.borrow().is_empty());
        assert!(c.api.time_requests.borrow().is_empty());
        assert_eq!(v.countries.borrow().len(), 3);
    }

    #[tokio::test]
    async fn test_country_error_status_leaves_selector_empty() {
        let mut api = ScriptedApi::new();
        api.countries = Reply::Status(503);
        let c = controller(api);
        c.initialize().await;
        let v = c.view();
        assert!(v.countries.borrow().is_empty());
        // Datasets and times are unaffected.
        assert_eq!(v.datasets.borrow().len(), 2);
        assert!(!v.is_visible(Panel::NotLoadedLabel));
        assert!(v.is_visible(Panel::SubsetSelection));
        assert_eq!(v.labels(), vec!["1/2020", "2/2020", "3/2020"]);
    }

    #[tokio::test]
    async fn test_times_unavailable_swaps_form_for_not_loaded_panel() {
        let mut api = ScriptedApi::new();
        api.times.insert("rfe", Reply::Status(500));
        let c = controller(api);
        c.initialize().await;
        assert!(!c.view().is_visible(Panel::Form));
        assert!(c.view().is_visible(Panel::NotLoaded));
        assert!(c.selection().is_none());
    }

    #[tokio::test]
    async fn test_times_transport_failure_replaces_loading_message() {
        let mut api = ScriptedApi::new();
        api.times.insert("sm", Reply::Transport);
        let c = controller(api);
        c.on_dataset_changed("sm").await;
        assert!(c.view().is_visible(Panel::Form));
        assert!(!c.view().is_visible(Panel::NotLoaded));
        assert_eq!(
            c.view().times_message.borrow().as_deref(),
            Some(TIMES_FAILED_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_empty_time_range_shows_message() {
        let mut api = ScriptedApi::new();
        api.times.insert(
            "rfe",
            Reply::Body(r#"{"starttime":"2021-05-01","endtime":"2021-02-01"}"#),
        );
        let c = controller(api);
        c.populate_times("rfe").await;
        assert!(c.selection().is_none());
        assert_eq!(
            c.view().times_message.borrow().as_deref(),
            Some(NO_TIMES_MESSAGE)
        );
    }

    #[tokio::test]
    async fn test_stale_time_range_response_dropped() {
        let api = ScriptedApi::new();
        let release_rfe = api.gate("rfe");
        let release_sm = api.gate("sm");
        let c = controller(api);

        let release = async move {
            // Newer request answers first, the older one arrives late.
            release_sm.send(()).unwrap();
            futures::pending!();
            release_rfe.send(()).unwrap();
        };
        futures::join!(
            c.on_dataset_changed("rfe"),
            c.on_dataset_changed("sm"),
            release
        );

        assert_eq!(
            c.view().labels(),
            vec!["1/2021", "2/2021", "3/2021", "4/2021", "5/2021", "6/2021"]
        );
        assert_eq!(c.selection().unwrap().options().len(), 6);
    }

    #[tokio::test]
    async fn test_selector_changes_keep_start_before_end() {
        let c = controller(ScriptedApi::new());
        c.populate_times("sm").await;

        c.on_end_selected(2);
        c.on_start_selected(4);
        let shown = c.view().time_selectors.borrow().clone().unwrap();
        assert_eq!((shown.start_index(), shown.end_index()), (4, 4));

        c.on_end_selected(1);
        let shown = c.view().time_selectors.borrow().clone().unwrap();
        assert_eq!((shown.start_index(), shown.end_index()), (1, 1));
    }

    #[test]
    fn test_selector_change_without_times_is_ignored() {
        let c = controller(ScriptedApi::new());
        c.on_start_selected(3);
        assert!(c.view().time_selectors.borrow().is_none());
    }

    #[test]
    fn test_restored_region_radio_then_point() {
        let c = controller(ScriptedApi::new());
        // Back-navigation restored "region" without a change event.
        c.view().spatial_mode.set(SpatialSelectionMode::Region);
        c.set_spatial_mode(c.view().checked_spatial_mode());
        assert!(c.view().is_visible(Panel::RegionSelection));
        assert!(!c.view().is_visible(Panel::PointSelection));

        c.view().spatial_mode.set(SpatialSelectionMode::Point);
        c.set_spatial_mode(SpatialSelectionMode::Point);
        assert!(c.view().is_visible(Panel::PointSelection));
        assert!(!c.view().is_visible(Panel::RegionSelection));
    }

    #[tokio::test]
    async fn test_initialize_follows_checked_radios() {
        let c = controller(ScriptedApi::new());
        c.view().spatial_mode.set(SpatialSelectionMode::Region);
        c.view().region_sub_mode.set(RegionSubMode::Bounds);
        c.initialize().await;
        assert!(c.view().is_visible(Panel::RegionSelection));
        assert!(!c.view().is_visible(Panel::PointSelection));
        assert!(c.view().is_visible(Panel::Bounds));
    }

    #[test]
    fn test_region_sub_mode_toggles_bounds_panel() {
        let c = controller(ScriptedApi::new());
        c.set_region_sub_mode(RegionSubMode::Bounds);
        assert!(c.view().is_visible(Panel::Bounds));
        c.set_region_sub_mode(RegionSubMode::NamedCountry);
        assert!(!c.view().is_visible(Panel::Bounds));
    }

    #[test]
    fn test_submit_blocked_without_email() {
        let c = controller(ScriptedApi::new());
        c.view().reference.replace("job-7".to_string());
        assert!(!c.validate_submission());
        assert_eq!(
            *c.view().alerts.borrow(),
            vec!["You must enter an email address and a job reference.".to_string()]
        );

        c.view().email.replace("user@example.org".to_string());
        assert!(c.validate_submission());
        assert_eq!(c.view().alerts.borrow().len(), 1);
    }

    #[test]
    fn test_reference_not_required_when_configured_off() {
        let config = FormConfig {
            require_reference: false,
            ..FormConfig::default()
        };
        let c = FormController::new(MockView::new(), ScriptedApi::new(), config);
        c.view().email.replace("user@example.org".to_string());
        assert!(c.validate_submission());
        assert!(c.view().alerts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_subset_request_from_form_state() {
        let c = controller(ScriptedApi::new());
        assert!(c.subset_request().is_none());

        c.initialize().await;
        c.view().email.replace("user@example.org".to_string());
        c.view().reference.replace("job-7".to_string());
        c.on_start_selected(1);

        let request = c.subset_request().unwrap();
        assert_eq!(request.dataset, "rfe");
        assert_eq!(request.area, RequestArea::Point { lat: 0.0, lon: 30.0 });
        assert_eq!(request.start_time, "2020-02-01T00:00:00.000Z");
        assert_eq!(request.end_time, "2020-03-01T00:00:00.000Z");

        c.view().spatial_mode.set(SpatialSelectionMode::Region);
        let request = c.subset_request().unwrap();
        assert_eq!(
            request.area,
            RequestArea::Country {
                region_id: "TCD".to_string()
            }
        );

        c.view().region_sub_mode.set(RegionSubMode::Bounds);
        let request = c.subset_request().unwrap();
        assert_eq!(
            request.area,
            RequestArea::Bounds(BoundingBox {
                min_lat: -10.0,
                max_lat: 10.0,
                min_lon: 20.0,
                max_lon: 40.0,
            })
        );
    }
}
