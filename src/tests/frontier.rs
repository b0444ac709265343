use crate::frontier::Frontier;

fn drain(frontier: &mut Frontier) -> Vec<(usize, u32)> {
    let mut popped = Vec::new();
    while let Some(entry) = frontier.pop() {
        popped.push((entry.node_index, entry.cost()));
    }
    popped
}

#[test]
fn pops_in_cost_order() {
    let mut frontier = Frontier::new(8);
    for &(node_index, cost) in &[(0, 50), (1, 20), (2, 70), (3, 10), (4, 40)] {
        frontier.push(node_index, cost);
    }
    assert_eq!(frontier.len(), 5);
    assert_eq!(
        drain(&mut frontier),
        vec![(3, 10), (1, 20), (4, 40), (0, 50), (2, 70)]
    );
    assert!(frontier.is_empty());
}

#[test]
fn ties_pop_in_insertion_order() {
    let mut frontier = Frontier::new(6);
    for &node_index in &[4, 1, 5, 0] {
        frontier.push(node_index, 30);
    }
    frontier.push(2, 10);
    let order = drain(&mut frontier)
        .into_iter()
        .map(|(node_index, _)| node_index)
        .collect::<Vec<_>>();
    assert_eq!(order, vec![2, 4, 1, 5, 0]);
}

#[test]
fn decrease_cost_updates_in_place() {
    let mut frontier = Frontier::new(4);
    frontier.push(0, 10);
    frontier.push(1, 20);
    frontier.push(2, 30);

    assert!(frontier.decrease_cost(2, 5));
    assert_eq!(frontier.len(), 3);
    assert_eq!(frontier.cost(2), Some(5));

    // not lower, or not present
    assert!(!frontier.decrease_cost(1, 25));
    assert!(!frontier.decrease_cost(1, 20));
    assert!(!frontier.decrease_cost(3, 1));

    assert_eq!(drain(&mut frontier), vec![(2, 5), (0, 10), (1, 20)]);
    assert!(frontier.pop().is_none());
}

#[test]
fn decreased_node_keeps_its_place_among_ties() {
    let mut frontier = Frontier::new(3);
    frontier.push(0, 40);
    frontier.push(1, 10);
    frontier.push(2, 10);
    assert!(frontier.decrease_cost(0, 10));
    let order = drain(&mut frontier)
        .into_iter()
        .map(|(node_index, _)| node_index)
        .collect::<Vec<_>>();
    assert_eq!(order, vec![0, 1, 2]);
}

#[test]
fn membership_follows_push_and_pop() {
    let mut frontier = Frontier::new(3);
    assert!(!frontier.contains(1));
    assert_eq!(frontier.cost(1), None);
    frontier.push(1, 7);
    frontier.push(2, 3);
    assert!(frontier.contains(1));
    assert!(frontier.contains(2));
    let entry = frontier.pop().unwrap();
    assert_eq!(entry.node_index, 2);
    assert!(!frontier.contains(2));
    assert!(frontier.contains(1));
    assert_eq!(frontier.cost(1), Some(7));
}

#[test]
fn pop_empty() {
    let mut frontier = Frontier::new(0);
    assert!(frontier.pop().is_none());
}

#[test]
fn many_updates_keep_heap_order() {
    let num_nodes = 64;
    let mut frontier = Frontier::new(num_nodes);
    for node_index in 0..num_nodes {
        frontier.push(node_index, 1000 + ((node_index * 37) % 101) as u32);
    }
    for node_index in (0..num_nodes).step_by(3) {
        let lower = frontier.cost(node_index).unwrap() - 500;
        assert!(frontier.decrease_cost(node_index, lower));
    }
    let costs = drain(&mut frontier)
        .into_iter()
        .map(|(_, cost)| cost)
        .collect::<Vec<_>>();
    assert_eq!(costs.len(), num_nodes);
    let mut sorted = costs.clone();
    sorted.sort();
    assert_eq!(costs, sorted);
}
