//! Scenario 3 from spec.md section 8: lose two systematic symbols and
//! recover them from repair symbols alone.

use raptor10::{Raptor, RaptorConfig};

#[test]
fn losing_two_source_symbols_still_recovers_them_from_repairs() {
    let k = 10u32;
    let sources: Vec<Vec<u8>> = (0..k).map(|i| vec![i as u8; 4]).collect();

    // Sender: derive intermediate symbols from the K systematic symbols and
    // draw 12 sequential encoding symbols, ESI 10 and 11 being repairs.
    let mut sender = Raptor::new(k, RaptorConfig::default()).unwrap();
    for (esi, payload) in sources.iter().cloned().enumerate() {
        sender.add_symbol(esi as u64, payload);
    }
    sender.calculate_intermediate_symbols().unwrap();
    let sent: Vec<(u64, Vec<u8>)> = (0..12).map(|_| sender.next_encoding_symbol().unwrap()).collect();

    // Receiver: everything except ESI 3 and ESI 7.
    let mut receiver = Raptor::new(k, RaptorConfig::default()).unwrap();
    for (esi, payload) in sent.iter().cloned() {
        if esi == 3 || esi == 7 {
            continue;
        }
        receiver.add_symbol(esi, payload);
    }

    assert!(receiver.can_decode());
    receiver.calculate_intermediate_symbols().unwrap();

    for (esi, expected) in sources.iter().enumerate() {
        let (got_esi, payload) = receiver.next_encoding_symbol().unwrap();
        assert_eq!(got_esi, esi as u64);
        assert_eq!(&payload, expected, "mismatch recovering esi={esi}");
    }
}
