//! Integration tests for the shortest-path engine.

use costar_core::{Movie, MovieId, Person, PersonId};
use costar_graph::store::GraphStore;
use costar_graph::traversal::{PathResult, ShortestPath};

const ALICE: PersonId = PersonId::new(1);
const BOB: PersonId = PersonId::new(2);
const CAROL: PersonId = PersonId::new(3);
const DAVE: PersonId = PersonId::new(4);

const HEIST: MovieId = MovieId::new(10);
const SEQUEL: MovieId = MovieId::new(11);
const SOLO: MovieId = MovieId::new(12);

/// Four people, two movies chaining three of them, one fully isolated:
/// Alice and Bob share "Heist", Bob and Carol share "Sequel", Dave shares
/// nothing (his only credit is a one-person movie).
fn toy_store() -> GraphStore {
    let mut builder = GraphStore::builder();
    builder.add_person(Person::new(ALICE, "Alice"));
    builder.add_person(Person::new(BOB, "Bob"));
    builder.add_person(Person::new(CAROL, "Carol"));
    builder.add_person(Person::new(DAVE, "Dave"));
    builder.add_movie(Movie::new(HEIST, "Heist"));
    builder.add_movie(Movie::new(SEQUEL, "Sequel"));
    builder.add_movie(Movie::new(SOLO, "Solo"));
    builder.add_star(ALICE, HEIST);
    builder.add_star(BOB, HEIST);
    builder.add_star(BOB, SEQUEL);
    builder.add_star(CAROL, SEQUEL);
    builder.add_star(DAVE, SOLO);
    builder.build()
}

/// Every step must be a real shared credit: the previous person and the
/// reached person both starred in the step's movie.
fn assert_valid_path(store: &GraphStore, source: PersonId, target: PersonId, path: &PathResult) {
    let mut previous = source;
    for step in &path.steps {
        let movie = store.movie(step.movie).expect("path references known movie");
        assert!(movie.has_star(previous), "{previous} did not star in {}", movie.title);
        assert!(movie.has_star(step.person), "{} did not star in {}", step.person, movie.title);
        previous = step.person;
    }
    if !path.is_empty() {
        assert_eq!(previous, target);
    }
}

#[test]
fn same_person_is_degree_zero() {
    let store = toy_store();
    let path = ShortestPath::new(ALICE, ALICE).find(&store).expect("reflexive");
    assert_eq!(path.degrees, 0);
    assert!(path.steps.is_empty());
}

#[test]
fn direct_costars_are_degree_one() {
    let store = toy_store();
    let path = ShortestPath::new(ALICE, BOB).find(&store).expect("connected");
    assert_eq!(path.degrees, 1);
    assert_eq!(path.steps[0].movie, HEIST);
    assert_eq!(path.steps[0].person, BOB);
}

#[test]
fn chain_through_shared_costar_is_degree_two() {
    let store = toy_store();
    let path = ShortestPath::new(ALICE, CAROL).find(&store).expect("connected");
    assert_eq!(path.degrees, 2);
    assert_eq!(path.steps[0].movie, HEIST);
    assert_eq!(path.steps[0].person, BOB);
    assert_eq!(path.steps[1].movie, SEQUEL);
    assert_eq!(path.steps[1].person, CAROL);
}

#[test]
fn isolated_person_is_not_connected() {
    let store = toy_store();
    assert!(ShortestPath::new(ALICE, DAVE).find(&store).is_none());
    assert!(ShortestPath::new(DAVE, ALICE).find(&store).is_none());
}

#[test]
fn reachability_is_symmetric_on_the_toy_store() {
    let store = toy_store();
    let forward = ShortestPath::new(ALICE, CAROL).find(&store).expect("connected");
    let backward = ShortestPath::new(CAROL, ALICE).find(&store).expect("connected");
    assert_eq!(forward.degrees, backward.degrees);
    assert_valid_path(&store, CAROL, ALICE, &backward);
}

#[test]
fn returned_paths_are_valid_credit_chains() {
    let store = toy_store();
    for (source, target) in [(ALICE, BOB), (ALICE, CAROL), (BOB, CAROL)] {
        let path = ShortestPath::new(source, target).find(&store).expect("connected");
        assert_valid_path(&store, source, target, &path);
    }
}

#[test]
fn shortcut_beats_longer_route() {
    // Alice reaches Eve both directly (one shared movie) and through a
    // three-hop chain; the direct credit must win.
    let eve = PersonId::new(5);
    let frank = PersonId::new(6);
    let direct = MovieId::new(20);
    let leg_one = MovieId::new(21);
    let leg_two = MovieId::new(22);

    let mut builder = GraphStore::builder();
    builder.add_person(Person::new(ALICE, "Alice"));
    builder.add_person(Person::new(eve, "Eve"));
    builder.add_person(Person::new(frank, "Frank"));
    builder.add_movie(Movie::new(direct, "Direct"));
    builder.add_movie(Movie::new(leg_one, "Leg One"));
    builder.add_movie(Movie::new(leg_two, "Leg Two"));
    builder.add_star(ALICE, direct);
    builder.add_star(eve, direct);
    builder.add_star(ALICE, leg_one);
    builder.add_star(frank, leg_one);
    builder.add_star(frank, leg_two);
    builder.add_star(eve, leg_two);
    let store = builder.build();

    let path = ShortestPath::new(ALICE, eve).find(&store).expect("connected");
    assert_eq!(path.degrees, 1);
    assert_eq!(path.steps[0].movie, direct);
}

#[test]
fn equal_length_routes_still_yield_a_minimal_valid_path() {
    // Two distinct two-hop routes from Alice to Carol; whichever the
    // set-iteration order discovers first, the result must be minimal
    // and valid.
    let via_bob = (MovieId::new(30), MovieId::new(31));
    let via_eve = (MovieId::new(32), MovieId::new(33));
    let eve = PersonId::new(5);

    let mut builder = GraphStore::builder();
    for (id, name) in [(ALICE, "Alice"), (BOB, "Bob"), (CAROL, "Carol"), (eve, "Eve")] {
        builder.add_person(Person::new(id, name));
    }
    for movie in [via_bob.0, via_bob.1, via_eve.0, via_eve.1] {
        builder.add_movie(Movie::new(movie, format!("Movie {movie}")));
    }
    builder.add_star(ALICE, via_bob.0);
    builder.add_star(BOB, via_bob.0);
    builder.add_star(BOB, via_bob.1);
    builder.add_star(CAROL, via_bob.1);
    builder.add_star(ALICE, via_eve.0);
    builder.add_star(eve, via_eve.0);
    builder.add_star(eve, via_eve.1);
    builder.add_star(CAROL, via_eve.1);
    let store = builder.build();

    let path = ShortestPath::new(ALICE, CAROL).find(&store).expect("connected");
    assert_eq!(path.degrees, 2);
    assert_valid_path(&store, ALICE, CAROL, &path);
}

#[test]
fn self_edges_are_harmless() {
    // Every person is their own neighbor through each shared movie; the
    // explored-set check must keep that from derailing or shortening the
    // search.
    let store = toy_store();
    let neighbors = store.neighbors_of(ALICE);
    assert!(neighbors.contains(&(HEIST, ALICE)));

    let path = ShortestPath::new(ALICE, CAROL).find(&store).expect("connected");
    assert_eq!(path.degrees, 2);
}

#[test]
fn distance_and_exists_agree_with_find() {
    let store = toy_store();
    assert_eq!(ShortestPath::new(ALICE, CAROL).distance(&store), Some(2));
    assert_eq!(ShortestPath::new(ALICE, ALICE).distance(&store), Some(0));
    assert_eq!(ShortestPath::new(ALICE, DAVE).distance(&store), None);
    assert!(ShortestPath::new(ALICE, BOB).exists(&store));
    assert!(!ShortestPath::new(CAROL, DAVE).exists(&store));
}

#[test]
fn find_path_convenience_matches_builder_form() {
    let store = toy_store();
    let via_builder = ShortestPath::new(ALICE, CAROL).find(&store);
    let via_convenience = ShortestPath::find_path(&store, ALICE, CAROL);
    assert_eq!(via_builder, via_convenience);
}

#[test]
fn concurrent_searches_share_one_store() {
    let store = toy_store();
    std::thread::scope(|scope| {
        let forward = scope.spawn(|| ShortestPath::new(ALICE, CAROL).find(&store));
        let backward = scope.spawn(|| ShortestPath::new(CAROL, ALICE).find(&store));
        let forward = forward.join().expect("no panic").expect("connected");
        let backward = backward.join().expect("no panic").expect("connected");
        assert_eq!(forward.degrees, 2);
        assert_eq!(backward.degrees, 2);
    });
}
