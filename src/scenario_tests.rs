#[cfg(test)]
mod tests {
    use crate::balance::{is_balanced, Condensation, WeakClusters};
    use crate::cluster::{LineIndex, LocalSearch, Partitioner};
    use crate::graph::{Sign, SignedGraph};
    use crate::predict::TriadPropagation;
    use petgraph::graph::NodeIndex;
    use proptest::prelude::*;
    use rand::prelude::*;

    fn node(i: usize) -> NodeIndex {
        NodeIndex::new(i)
    }

    #[test]
    fn four_node_network_condenses_to_two_balanced_camps() {
        // Friendly triangle {0,1,2} with node 3 hostile to it.
        let g =
            SignedGraph::from_triples(4, &[(0, 1, 1), (1, 2, 1), (0, 2, 1), (2, 3, -1)]).unwrap();

        let c = Condensation::of(&g);
        assert_eq!(c.len(), 2);
        let triangle_id = c.supernode_of(node(0));
        assert_eq!(c.supernode_of(node(1)), triangle_id);
        assert_eq!(c.supernode_of(node(2)), triangle_id);
        assert_ne!(c.supernode_of(node(3)), triangle_id);
        assert_eq!(c.reduced().edge_count(), 1);
        assert!(c.is_balanced());

        // The same structure read as a cluster report.
        let clusters = WeakClusters::new().partition(&g).unwrap();
        assert_eq!(clusters, c.membership());
    }

    #[test]
    fn optimizer_recovers_the_weakly_balanced_split() {
        // A balanced two-camp graph: the optimum has zero cost and the
        // optimizer's partition agrees with the condensation's camps.
        let mut triples = vec![
            (0, 1, 1),
            (0, 2, 1),
            (1, 2, 1),
            (3, 4, 1),
            (3, 5, 1),
            (4, 5, 1),
        ];
        for u in 0..3 {
            for v in 3..6 {
                triples.push((u, v, -1));
            }
        }
        let g = SignedGraph::from_triples(6, &triples).unwrap();
        assert!(is_balanced(&g));

        let best = LocalSearch::new(2)
            .with_iterations(3000)
            .with_seed(42)
            .optimize(&g)
            .unwrap();
        assert_eq!(best.score.value, 0.0);

        let camps = Condensation::of(&g).into_membership();
        let score = LineIndex::new().score(&g, &camps).unwrap();
        assert_eq!(score.value, 0.0);
    }

    #[test]
    fn predicted_signs_complete_a_balanced_network() {
        // Two camps with several unobserved ties; propagation fills
        // them in and the completed graph is still balanced.
        let g = SignedGraph::from_triples(
            4,
            &[
                (0, 1, 1),
                (2, 3, 1),
                (0, 2, -1),
                (1, 2, 0),
                (0, 3, 0),
                (1, 3, 0),
            ],
        )
        .unwrap();

        let prediction = TriadPropagation::new().predict(&g);
        assert_eq!(prediction.unresolved(), 0);
        assert_eq!(prediction.sign_of(node(1), node(2)), Some(Sign::Negative));
        assert_eq!(prediction.sign_of(node(0), node(3)), Some(Sign::Negative));
        assert_eq!(prediction.sign_of(node(1), node(3)), Some(Sign::Negative));

        let completed = prediction.apply_to(&g).unwrap();
        assert_eq!(completed.unknown_edge_count(), 0);
        assert!(is_balanced(&completed));
    }

    fn random_signed_graph(seed: u64, all_positive: bool) -> SignedGraph {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = rng.random_range(2..10usize);
        let mut triples = Vec::new();
        for u in 0..n {
            for v in (u + 1)..n {
                if rng.random_bool(0.5) {
                    let sign = if all_positive {
                        1
                    } else {
                        [1i8, -1, 0][rng.random_range(0..3)]
                    };
                    triples.push((u, v, sign));
                }
            }
        }
        SignedGraph::from_triples(n, &triples).unwrap()
    }

    proptest! {
        #[test]
        fn graphs_without_negative_edges_are_always_balanced(seed in any::<u64>()) {
            let g = random_signed_graph(seed, true);
            prop_assert!(is_balanced(&g));
        }

        #[test]
        fn two_camp_constructions_are_always_balanced(
            camps in proptest::collection::vec(any::<bool>(), 2..12),
        ) {
            // All positive within a camp, all negative across: the
            // defining split exists, so the verdict must agree.
            let n = camps.len();
            let mut triples = Vec::new();
            for u in 0..n {
                for v in (u + 1)..n {
                    let sign = if camps[u] == camps[v] { 1 } else { -1 };
                    triples.push((u, v, sign));
                }
            }
            let g = SignedGraph::from_triples(n, &triples).unwrap();
            prop_assert!(is_balanced(&g));
        }

        #[test]
        fn longer_searches_never_score_worse(seed in any::<u64>(), graph_seed in any::<u64>()) {
            let g = random_signed_graph(graph_seed, false);
            let short = LocalSearch::new(3)
                .with_iterations(50)
                .with_seed(seed)
                .optimize(&g)
                .unwrap();
            let long = LocalSearch::new(3)
                .with_iterations(400)
                .with_seed(seed)
                .optimize(&g)
                .unwrap();
            prop_assert!(long.score.value <= short.score.value);
        }

        #[test]
        fn prediction_is_idempotent(graph_seed in any::<u64>()) {
            let g = random_signed_graph(graph_seed, false);
            let predictor = TriadPropagation::new();
            prop_assert_eq!(predictor.predict(&g), predictor.predict(&g));
        }
    }
}
