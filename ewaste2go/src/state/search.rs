use ewaste_data::CollectionPoint;

/// Case-insensitive match on the point's name or its accepted items
/// (joined without a separator)
pub fn matches_query(point: &CollectionPoint, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    point.name.to_lowercase().contains(&query)
        || point.accepted_items.concat().to_lowercase().contains(&query)
}

/// Filtered points split the way the directory shows them
#[derive(Debug, Default)]
pub struct PointSections<'a> {
    pub government: Vec<&'a CollectionPoint>,
    pub partners: Vec<&'a CollectionPoint>,
}

impl<'a> PointSections<'a> {
    pub fn len(&self) -> usize {
        self.government.len() + self.partners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row `index` in display order: government first, then partners
    pub fn get(&self, index: usize) -> Option<&'a CollectionPoint> {
        self.government
            .get(index)
            .or_else(|| self.partners.get(index.checked_sub(self.government.len())?))
            .copied()
    }
}

pub fn point_sections<'a>(points: &'a [CollectionPoint], query: &str) -> PointSections<'a> {
    let (government, partners): (Vec<_>, Vec<_>) = points
        .iter()
        .filter(|p| matches_query(p, query))
        .partition(|p| p.is_government());
    PointSections {
        government,
        partners,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ewaste_data::fixtures;

    #[test]
    fn empty_query_keeps_everything() {
        let points = fixtures::collection_points();
        let sections = point_sections(&points, "");
        assert_eq!(sections.government.len(), 1);
        assert_eq!(sections.partners.len(), 5);
    }

    #[test]
    fn matches_name_case_insensitively() {
        let points = fixtures::collection_points();
        let sections = point_sections(&points, "REDSOFT");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.get(0).unwrap().id, "cp4");
    }

    #[test]
    fn matches_accepted_items() {
        let points = fixtures::collection_points();
        let sections = point_sections(&points, "batteries");
        let ids: Vec<_> = (0..sections.len())
            .filter_map(|i| sections.get(i))
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["cp2", "cp5"]);
    }

    #[test]
    fn items_are_joined_without_separator() {
        let points = fixtures::collection_points();
        // "All E-Waste" + "Large Appliances"
        assert!(matches_query(&points[0], "e-wastelarge"));
    }

    #[test]
    fn filter_is_idempotent_and_monotone() {
        let points = fixtures::collection_points();
        let broad = point_sections(&points, "e");
        let narrow = point_sections(&points, "e-waste");
        assert!(narrow.len() <= broad.len());
        for i in 0..narrow.len() {
            let point = narrow.get(i).unwrap();
            assert!(matches_query(point, "e"));
            assert!(matches_query(point, "e-waste"));
        }
    }

    #[test]
    fn unmatched_query_leaves_no_points() {
        let points = fixtures::collection_points();
        assert!(points.iter().all(|p| !matches_query(p, "zzqq")));
        let sections = point_sections(&points, "zzqq");
        assert!(sections.is_empty());
        assert_eq!(sections.len(), 0);
        assert!(sections.get(0).is_none());
    }

    #[test]
    fn get_walks_government_then_partners() {
        let points = fixtures::collection_points();
        let sections = point_sections(&points, "");
        assert!(sections.get(0).unwrap().is_government());
        assert_eq!(sections.get(1).unwrap().id, "cp2");
        assert!(sections.get(6).is_none());
    }
}
