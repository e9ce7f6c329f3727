use as2d::assets::{Catalog, Sprites};
use as2d::entities::{Entity, EntityKind};
use as2d::layout::Layout;
use as2d::spawn;
use as2d::store::EntityStore;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn icon(index: u32) -> Entity {
    let sprites = Sprites::load(&Catalog::builtin()).unwrap();
    spawn::life_icon(&sprites, &Layout::new(800.0, 480.0), index)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn spawn_and_get() {
    let mut store = EntityStore::new();
    assert!(store.is_empty());
    let id = store.spawn(icon(0));
    assert_eq!(store.len(), 1);
    assert!(store.contains(id));
    assert_eq!(store.get(id).unwrap().kind(), EntityKind::LifeIcon);
}

#[test]
fn marked_entities_survive_until_reap() {
    let mut store = EntityStore::new();
    let keep = store.spawn(icon(0));
    let doomed = store.spawn(icon(1));

    store.mark_destroyed(doomed);
    assert!(store.contains(doomed)); // still there mid-frame
    assert!(!store.get(doomed).unwrap().is_active());

    assert_eq!(store.reap(), 1);
    assert!(!store.contains(doomed));
    assert!(store.contains(keep));
    assert_eq!(store.len(), 1);
}

#[test]
fn reap_with_nothing_flagged_is_a_no_op() {
    let mut store = EntityStore::new();
    store.spawn(icon(0));
    assert_eq!(store.reap(), 0);
    assert_eq!(store.len(), 1);
}

#[test]
fn recycled_slot_does_not_answer_to_old_id() {
    let mut store = EntityStore::new();
    let old = store.spawn(icon(0));
    store.mark_destroyed(old);
    store.reap();

    let new = store.spawn(icon(1));
    assert_eq!(new.index(), old.index()); // slot reused
    assert_ne!(new.generation(), old.generation());
    assert!(store.get(old).is_none());
    assert!(store.contains(new));
}

#[test]
fn marking_a_stale_id_is_ignored() {
    let mut store = EntityStore::new();
    let old = store.spawn(icon(0));
    store.remove(old);
    let new = store.spawn(icon(1));
    store.mark_destroyed(old);
    assert!(store.get(new).unwrap().is_active());
}

#[test]
fn remove_takes_entity_out_immediately() {
    let mut store = EntityStore::new();
    let id = store.spawn(icon(0));
    assert!(store.remove(id).is_some());
    assert!(store.remove(id).is_none());
    assert!(store.is_empty());
}

#[test]
fn ids_follow_slot_order() {
    let mut store = EntityStore::new();
    let a = store.spawn(icon(0));
    let b = store.spawn(icon(1));
    let c = store.spawn(icon(2));
    assert_eq!(store.ids(), vec![a, b, c]);

    store.remove(b);
    assert_eq!(store.ids(), vec![a, c]);
    assert_eq!(store.iter().count(), 2);
}

#[test]
fn clone_is_independent() {
    let mut store = EntityStore::new();
    let id = store.spawn(icon(0));
    let mut copy = store.clone();
    copy.mark_destroyed(id);
    copy.reap();
    assert!(store.contains(id));
    assert!(!copy.contains(id));
}
