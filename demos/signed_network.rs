use valence::{
    balance::Condensation, cluster::LocalSearch, predict::TriadPropagation, LineIndex, SignedGraph,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Minimal end-to-end: signed edge list -> balance verdict ->
    // optimized clustering -> sign prediction.

    // Three camps: {0,1,2} and {3,4} friendly inside, hostile across;
    // two ties unobserved.
    let g = SignedGraph::from_triples(
        5,
        &[
            (0, 1, 1),
            (1, 2, 1),
            (0, 2, 1),
            (3, 4, 1),
            (0, 3, -1),
            (2, 4, -1),
            (1, 3, 0),
            (0, 4, 0),
        ],
    )?;

    println!("n_nodes={} n_edges={}", g.node_count(), g.edge_count());

    // Balance verdict + supernode report.
    let condensation = Condensation::of(&g);
    println!(
        "supernodes={} balanced={}",
        condensation.len(),
        condensation.is_balanced()
    );
    for (id, members) in condensation.supernodes().iter().enumerate() {
        let ids: Vec<usize> = members.iter().map(|n| n.index()).collect();
        println!("  supernode {}: {:?}", id, ids);
    }

    // Two-cluster line-index optimization, three seeds.
    let search = LocalSearch::new(2).with_iterations(2000);
    let best = search.optimize_restarts(&g, &[1, 2, 3])?;
    let baseline = LineIndex::new().score(&g, &vec![0; g.node_count()])?;
    println!(
        "line index: single cluster {:.2} -> optimized {:.2} (P={}, N={})",
        baseline.value, best.score.value, best.score.frustrated_positive,
        best.score.frustrated_negative
    );
    println!("  assignment: {:?}", best.assignment);

    // Fill in the unobserved ties from triangles.
    let prediction = TriadPropagation::new().predict(&g);
    println!(
        "predicted {} signs, {} unresolved",
        prediction.len(),
        prediction.unresolved()
    );
    for ((a, b), sign) in prediction.iter() {
        println!("  {}-{}: {}", a.index(), b.index(), sign);
    }

    Ok(())
}
