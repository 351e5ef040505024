//! Drives a whole console session through the public API.

use outlet::adapters::{LaptopAdapter, Outlet, RefrigeratorAdapter, SmartphoneAdapter};
use outlet::console::{Console, EXIT_MESSAGE, INVALID_CHOICE, MENU};
use outlet::devices::{Laptop, Refrigerator, SmartphoneCharger};
use tokio::io::BufReader;
use tokio::sync::watch;

#[test]
fn adapters_preserve_device_output() {
    let laptop = LaptopAdapter::new(Laptop::new());
    let refrigerator = RefrigeratorAdapter::new(Refrigerator::new());
    let smartphone = SmartphoneAdapter::new(SmartphoneCharger::new());

    let outlets: [(&dyn Outlet, &str); 3] = [
        (&laptop as &dyn Outlet, laptop.device().charge()),
        (&refrigerator as &dyn Outlet, refrigerator.device().start_cooling()),
        (&smartphone as &dyn Outlet, smartphone.device().charge_phone()),
    ];
    for (outlet, direct) in outlets {
        assert_eq!(outlet.plug_in(), direct);
        assert_eq!(outlet.plug_in(), outlet.plug_in());
    }
}

#[tokio::test]
async fn mixed_session() {
    let mut output = Vec::new();
    Console::new()
        .with_io(&b"2\n  9 \nhello\n1\n4\n"[..], &mut output)
        .run()
        .await
        .unwrap();

    let output = String::from_utf8(output).unwrap();
    let lines: Vec<&str> = output
        .split(MENU)
        .filter(|chunk| !chunk.is_empty())
        .map(|chunk| chunk.trim_end())
        .collect();
    assert_eq!(
        lines,
        [
            "Refrigerator is cooling.",
            INVALID_CHOICE,
            INVALID_CHOICE,
            "Laptop is charging.",
            EXIT_MESSAGE,
        ]
    );
}

#[tokio::test]
async fn killswitch_stops_a_waiting_session() {
    // the client half stays open and silent, so the console blocks on input
    let (_client, server) = tokio::io::duplex(64);
    let (stop_tx, stop_rx) = watch::channel(());
    stop_tx.send(()).unwrap();

    let mut output = Vec::new();
    Console::new()
        .with_io(BufReader::new(server), &mut output)
        .with_killswitch(stop_rx)
        .run()
        .await
        .unwrap();

    assert_eq!(String::from_utf8(output).unwrap(), MENU);
}

#[tokio::test]
async fn dropped_killswitch_is_ignored() {
    let (stop_tx, stop_rx) = watch::channel(());
    drop(stop_tx);

    let mut output = Vec::new();
    Console::new()
        .with_io(&b"3\n4\n"[..], &mut output)
        .with_killswitch(stop_rx)
        .run()
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(output).unwrap(),
        format!("{MENU}Smartphone is charging.\n{MENU}{EXIT_MESSAGE}\n")
    );
}
