//! Union graph scenarios.

use onto_tests::prelude::*;
use pretty_assertions::assert_eq;
use std::rc::Rc;

fn all(graph: &UnionGraph) -> Vec<Triple> {
    let mut found = graph
        .find(&TriplePattern::ANY)
        .unwrap()
        .collect::<GraphResult<Vec<_>>>()
        .unwrap();
    found.sort();
    found
}

fn base_ids(graph: &UnionGraph) -> Vec<usize> {
    graph.list_sub_graph_bases().iter().map(onto_graph::graph_key).collect()
}

// ========== TEST: add_remove_round_trip ==========
#[test]
fn test_add_remove_round_trip() {
    init_tracing();
    // GIVEN a composite with one leaf sub-graph
    let g = union_over(&[triple!("a", "p", "b")], &[GraphRef::from(mem(&[]))]).unwrap();
    let bases = base_ids(&g);
    let subs = g.sub_graphs();

    // WHEN a composite is added then removed
    let extra = union_over(&[triple!("x", "p", "y")], &[]).unwrap();
    g.add_sub_graph(&extra).unwrap();
    assert_eq!(g.list_sub_graph_bases().len(), 3);
    g.remove_sub_graph(&extra).unwrap();

    // THEN the structure is as before
    assert_eq!(base_ids(&g), bases);
    assert_eq!(g.sub_graphs(), subs);
    assert!(g.has_sub_graph());
    assert!(extra.super_graphs().is_empty());
}

// ========== TEST: distinct_versus_plain_find ==========
#[test]
fn test_distinct_versus_plain_find() {
    // GIVEN three leaves holding the same triple
    let t = triple!("a", "p", "b");
    let leaves: Vec<GraphRef> = (0..3).map(|_| GraphRef::from(mem(&[t.clone()]))).collect();

    let distinct = UnionGraph::new(mem(&[])).unwrap();
    let plain = UnionGraph::builder(mem(&[]))
        .controls(&ModelControls::default().with_distinct_union(false))
        .build()
        .unwrap();
    for leaf in &leaves {
        distinct.add_sub_graph(leaf.clone()).unwrap();
        plain.add_sub_graph(leaf.clone()).unwrap();
    }

    // THEN distinct yields T once, plain once per leaf
    assert_eq!(all(&distinct), vec![t.clone()]);
    assert_eq!(all(&plain), vec![t.clone(), t.clone(), t]);
    assert_eq!(distinct.size().unwrap(), 1);
    assert_eq!(plain.size().unwrap(), 3);
}

// ========== TEST: add_supplied_by_sub_graph_leaves_base ==========
#[test]
fn test_add_supplied_by_sub_graph_leaves_base() {
    let t = triple!("A", "subClassOf", "B");
    let imported = union_over(&[t.clone()], &[]).unwrap();
    let g = union_over(&[], &[GraphRef::from(&imported)]).unwrap();

    g.add(t.clone()).unwrap();
    g.add(triple!("C", "subClassOf", "A")).unwrap();

    assert_eq!(g.base_graph().size().unwrap(), 1);
    assert!(!g.base_graph().contains(&t).unwrap());
    assert!(g.contains(&t).unwrap());
}

// ========== TEST: invalidation_reaches_ancestors ==========
#[test]
fn test_invalidation_reaches_ancestors() {
    // GIVEN P -> C -> X
    let x = union_over(&[triple!("x", "p", "y")], &[]).unwrap();
    let c = union_over(&[], &[GraphRef::from(&x)]).unwrap();
    let p = union_over(&[], &[GraphRef::from(&c)]).unwrap();
    assert!(p.contains(&triple!("x", "p", "y")).unwrap());
    let cached = p.list_sub_graph_bases();

    // WHEN C drops X
    c.remove_sub_graph(&x).unwrap();

    // THEN P's flattened set is recomputed without X's base
    let fresh = p.list_sub_graph_bases();
    assert!(!Rc::ptr_eq(&cached, &fresh));
    assert_eq!(fresh.len(), 2);
    assert!(!p.contains(&triple!("x", "p", "y")).unwrap());
    assert!(p.is_empty().unwrap());
}

// ========== TEST: self_reference_terminates ==========
#[test]
fn test_self_reference_terminates() {
    let t = triple!("a", "p", "b");
    let u = union_over(&[t.clone()], &[]).unwrap();
    let base = u.base_graph().as_leaf().unwrap().clone();

    u.add_sub_graph(&u).unwrap();

    let bases = u.list_sub_graph_bases();
    assert_eq!(bases.len(), 1);
    assert!(Rc::ptr_eq(&bases[0], &base));
    assert_eq!(all(&u), vec![t.clone()]);
    assert!(u.contains(&t).unwrap());
    assert_eq!(u.size().unwrap(), 1);
    assert_eq!(u.super_graphs(), vec![u.clone()]);

    u.remove_sub_graph(&u).unwrap();
}

// ========== TEST: mutual_composition_terminates ==========
#[test]
fn test_mutual_composition_terminates() {
    // GIVEN A -> B -> A
    let a = union_over(&[triple!("a", "p", "1")], &[]).unwrap();
    let b = union_over(&[triple!("b", "p", "2")], &[GraphRef::from(&a)]).unwrap();
    a.add_sub_graph(&b).unwrap();

    // THEN both see both bases, each once
    assert_eq!(all(&a), all(&b));
    assert_eq!(a.size().unwrap(), 2);
    assert_eq!(a.list_sub_graph_bases().len(), 2);

    a.remove_sub_graph(&b).unwrap();
}

// ========== TEST: close_marks_linked_graphs ==========
#[test]
fn test_close_marks_linked_graphs() {
    // GIVEN P -> C -> leaf, and a sibling S -> C
    let leaf = mem(&[triple!("a", "p", "b")]);
    let c = union_over(&[], &[GraphRef::from(&leaf)]).unwrap();
    let p = union_over(&[], &[GraphRef::from(&c)]).unwrap();
    let s = union_over(&[], &[GraphRef::from(&c)]).unwrap();

    // WHEN P is closed
    p.close().unwrap();

    // THEN every leaf below P is closed and all linked composites refuse work
    assert!(leaf.borrow().is_closed());
    assert!(c.base_graph().is_closed());
    for graph in [&p, &c, &s] {
        assert!(graph.is_closed());
        assert_eq!(graph.contains(&triple!("a", "p", "b")), Err(GraphError::Closed));
        assert_eq!(graph.add(triple!("x", "p", "y")), Err(GraphError::Closed));
    }
    assert_eq!(p.remove_sub_graph(&c), Err(GraphError::Closed));
    assert!(p.close().is_ok());
}

// ========== TEST: closed_parts_are_configuration_errors ==========
#[test]
fn test_closed_parts_are_configuration_errors() {
    let closed = mem(&[]);
    closed.borrow_mut().close();

    let err = UnionGraph::new(closed.clone()).unwrap_err();
    assert!(matches!(err, GraphError::Configuration(_)));

    let g = union_over(&[], &[]).unwrap();
    let err = g.add_sub_graph(closed).unwrap_err();
    assert!(matches!(err, GraphError::Configuration(_)));
    assert!(!g.has_sub_graph());
}

// ========== TEST: events_in_order ==========
#[test]
fn test_events_in_order() {
    // GIVEN a parent and a child with separate managers and recorders
    let parent_events = Rc::new(Recorder::new());
    let child_events = Rc::new(Recorder::new());
    let parent = union_over(&[triple!("a", "p", "b")], &[]).unwrap();
    let child = union_over(&[], &[]).unwrap();
    parent.event_manager().register(parent_events.clone());
    child.event_manager().register(child_events.clone());
    let (p, c) = (parent.id(), child.id());
    let t = triple!("c", "p", "d");

    // WHEN the child is attached, a triple added, a pattern removed and the
    // base cleared
    parent.add_sub_graph(&child).unwrap();
    parent.add(t.clone()).unwrap();
    parent.remove(&TriplePattern::subject("c")).unwrap();
    parent.clear().unwrap();
    parent.remove_sub_graph(&child).unwrap();

    // THEN the parent heard every step in order
    assert_eq!(
        parent_events.take(),
        vec![
            Event::OnAddSubGraph(p, c),
            Event::SubGraphAdded(p, c),
            Event::OnAddTriple(p, t.clone()),
            Event::TripleAdded(p, t.clone()),
            Event::OnDeleteTriple(p, t.clone()),
            Event::TripleDeleted(p, t),
            Event::Removed(p, TriplePattern::subject("c")),
            Event::OnClear(p),
            Event::Cleared(p),
            Event::OnRemoveSubGraph(p, c),
            Event::SubGraphRemoved(p, c),
        ]
    );
    // AND the child heard it was attached
    assert_eq!(child_events.take(), vec![Event::SuperGraphAdded(c, p)]);
    assert!(parent.is_empty().unwrap());
}

// ========== TEST: muted_events ==========
#[test]
fn test_muted_events() {
    let recorder = Rc::new(Recorder::new());
    let g = union_over(&[], &[]).unwrap();
    let manager = g.event_manager().clone();
    manager.register(recorder.clone());

    manager.off();
    g.add(triple!("a", "p", "b")).unwrap();
    assert!(recorder.take().is_empty());

    manager.on();
    g.delete(&triple!("a", "p", "b")).unwrap();
    assert_eq!(recorder.take().len(), 2);
    assert!(g.is_empty().unwrap());
}

// ========== TEST: find_stops_on_leaf_error ==========
#[test]
fn test_find_stops_on_leaf_error() {
    // GIVEN a composite whose second leaf is closed behind its back
    let broken = mem(&[triple!("x", "p", "y")]);
    let g = union_over(&[triple!("a", "p", "b")], &[GraphRef::from(&broken)]).unwrap();
    broken.borrow_mut().close();

    // THEN find yields the base triple, then the error, then stops
    let results: Vec<_> = g.find(&TriplePattern::ANY).unwrap().collect();
    assert_eq!(results, vec![Ok(triple!("a", "p", "b")), Err(GraphError::Closed)]);
    assert_eq!(g.size(), Err(GraphError::Closed));
}
