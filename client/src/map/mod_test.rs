use super::*;

/// In-memory widget that records every call.
#[derive(Default)]
struct RecordingMap {
    mounted: bool,
    calls: Vec<String>,
}

impl MapProvider for RecordingMap {
    type Container = ();

    fn mount(
        &mut self,
        _container: &(),
        center: Coordinate,
        zoom: u8,
        _on_click: Box<dyn Fn(Coordinate)>,
    ) -> Result<(), MapError> {
        self.mounted = true;
        self.calls.push(format!("mount {} z{zoom}", center.label()));
        Ok(())
    }

    fn show_marker(&mut self, at: Coordinate) -> Result<(), MapError> {
        if !self.mounted {
            return Err(MapError::Unavailable);
        }
        self.calls.push(format!("marker {}", at.label()));
        Ok(())
    }

    fn pan_to(&mut self, at: Coordinate) -> Result<(), MapError> {
        if !self.mounted {
            return Err(MapError::Unavailable);
        }
        self.calls.push(format!("pan {}", at.label()));
        Ok(())
    }

    fn search(&self, query: &str, on_result: Box<dyn FnOnce(Result<Coordinate, MapError>)>) {
        on_result(Err(MapError::NoMatch(query.to_owned())));
    }
}

#[test]
fn coordinate_label_uses_five_decimals() {
    assert_eq!(NAIROBI.label(), "Lat -1.29210, Lng 36.82190");
    assert_eq!(Coordinate::new(0.123456789, -0.5).label(), "Lat 0.12346, Lng -0.50000");
}

#[test]
fn apply_update_draws_marker_before_panning() {
    let mut map = RecordingMap::default();
    map.mount(&(), NAIROBI, DEFAULT_ZOOM, Box::new(|_| {})).unwrap();
    let at = Coordinate::new(-4.05, 39.66);

    apply_update(&mut map, MapUpdate { marker: Some(at), pan_to: Some(at) }).unwrap();

    assert_eq!(
        map.calls,
        vec![
            "mount Lat -1.29210, Lng 36.82190 z14".to_owned(),
            "marker Lat -4.05000, Lng 39.66000".to_owned(),
            "pan Lat -4.05000, Lng 39.66000".to_owned(),
        ]
    );
}

#[test]
fn apply_update_surfaces_unmounted_widget() {
    let mut map = RecordingMap::default();
    let update = MapUpdate { marker: Some(NAIROBI), pan_to: None };
    assert_eq!(apply_update(&mut map, update), Err(MapError::Unavailable));
}

#[test]
fn empty_update_touches_nothing() {
    let mut map = RecordingMap::default();
    assert!(MapUpdate::default().is_empty());
    apply_update(&mut map, MapUpdate::default()).unwrap();
    assert!(map.calls.is_empty());
}

#[test]
fn search_reports_no_match() {
    let map = RecordingMap::default();
    let seen = std::rc::Rc::new(std::cell::RefCell::new(None));
    let sink = seen.clone();
    map.search("Atlantis", Box::new(move |result| *sink.borrow_mut() = Some(result)));
    assert_eq!(*seen.borrow(), Some(Err(MapError::NoMatch("Atlantis".to_owned()))));
}
