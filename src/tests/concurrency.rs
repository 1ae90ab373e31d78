//! Aligning from several threads at once.

use std::thread;

use crate::{
    Aligner, DocumentAligner, EntityMention, GoldMention, IdentityRoles, KbpString, MentionId,
    MentionInventory, Response, Span,
};

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_aligners_are_thread_safe() {
    assert_send_sync::<Aligner>();
    assert_send_sync::<DocumentAligner<'static>>();
}

#[test]
fn test_parallel_matches_sequential() {
    let mentions: MentionInventory = (0..20)
        .map(|i| {
            GoldMention::Entity(EntityMention {
                id: MentionId::new(format!("m{}", i)),
                entity_id: format!("e{}", i / 2),
                extent: Span::new(i * 10, i * 10 + 5).unwrap(),
                head: None,
                role: "Agent".to_string(),
            })
        })
        .collect();
    let responses: Vec<Response> = (0..50)
        .map(|i| {
            let cas = KbpString::new("x", Span::new(i * 4, i * 4 + 5).unwrap());
            Response::builder(format!("doc{}", i), "Life.Die", "Agent", cas).build()
        })
        .collect();

    let aligner = Aligner::default();
    let doc = aligner.for_document(&mentions, None, &IdentityRoles);
    let sequential = doc.align_all(&responses);

    let parallel: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = responses
            .chunks(7)
            .map(|chunk| scope.spawn(move || doc.align_all(chunk)))
            .collect();
        handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect()
    });

    assert_eq!(parallel, sequential);
}
