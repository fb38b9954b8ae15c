use indexmap::IndexMap;
use linechart_rs::core::{Dataset, Series, compute_boundaries};
use linechart_rs::render::Color;
use proptest::prelude::*;

proptest! {
    #[test]
    fn boundary_extremes_are_members_of_the_line_values(
        columns in prop::collection::vec(
            prop::collection::vec(-10_000.0f64..10_000.0, 12),
            1..5
        )
    ) {
        let mut series = vec![Series::x("x", (0..12).map(f64::from).collect())];
        let mut colors = IndexMap::new();
        for (index, values) in columns.iter().enumerate() {
            let name = format!("y{index}");
            colors.insert(name.clone(), Color::rgb(0.0, 0.0, 0.0));
            series.push(Series::line(name, values.clone()));
        }
        let dataset = Dataset::new(series, colors).expect("dataset");

        let boundary = compute_boundaries(&dataset).expect("boundary");
        prop_assert!(boundary.min <= boundary.max);

        let all: Vec<f64> = columns.iter().flatten().copied().collect();
        prop_assert!(all.contains(&boundary.min));
        prop_assert!(all.contains(&boundary.max));
        prop_assert!(all.iter().all(|value| *value >= boundary.min && *value <= boundary.max));
    }
}
