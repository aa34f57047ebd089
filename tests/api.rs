use creational_patterns::abstract_factory::{AccessoryFactory, PhoneFactory, TabletFactory};
use creational_patterns::factory_method::{HttpAdapterFactory, RestHttpAdapterFactory};
use creational_patterns::{
    app_accessory_factory, app_accessory_factory_with, app_factory, AccessoryArgs, DemoConfig, Family,
    NO_FACTORY_MESSAGE,
};
use pretty_assertions::assert_eq;

fn capture(run: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut out = Vec::new();
    run(&mut out);
    String::from_utf8(out).unwrap()
}

#[test]
fn test_accessory_driver_through_public_api() {
    let output = capture(|out| app_accessory_factory(Some(&TabletFactory), out).unwrap());
    assert_eq!(
        output,
        "[CPU] 12345 Tablet series\n\
         [MEMORY] 64 Tablet capacity in GB\n\
         [DISPLAY] Tablet resolution\n"
    );
}

#[test]
fn test_every_family_from_config_defaults() {
    let config = DemoConfig::default();
    for family in &config.families {
        let factory: Box<dyn AccessoryFactory> = family.factory();
        let output = capture(|out| {
            app_accessory_factory_with(Some(factory.as_ref()), &config.accessory, out).unwrap()
        });
        assert_eq!(output.lines().count(), 3);
        assert!(output.starts_with(&format!("[CPU] 12345 {} series", family.output_label())));
    }
}

#[test]
fn test_custom_args_through_public_api() {
    let args = AccessoryArgs {
        series: "Z3".to_string(),
        capacity_gb: 4,
    };
    let output = capture(|out| app_accessory_factory_with(Some(&PhoneFactory), &args, out).unwrap());
    assert!(output.contains("[CPU] Z3 phone series"));
    assert!(output.contains("[MEMORY] 4 phone capacity in GB"));
}

#[test]
fn test_http_driver_through_public_api() {
    let factory: &dyn HttpAdapterFactory = &RestHttpAdapterFactory;
    let output = capture(|out| app_factory(Some(factory), out).unwrap());
    assert_eq!(output, "[GET]\n[POST]\n[PUT]\n[DELETE]\n");
}

#[test]
fn test_both_drivers_share_no_factory_notice() {
    let accessory = capture(|out| app_accessory_factory(None, out).unwrap());
    let http = capture(|out| app_factory(None, out).unwrap());
    assert_eq!(accessory, format!("{NO_FACTORY_MESSAGE}\n"));
    assert_eq!(http, accessory);
}

#[test]
fn test_family_parse_feeds_factory() {
    let family: Family = "TABLET".parse().unwrap();
    let output = capture(|out| app_accessory_factory(Some(family.factory().as_ref()), out).unwrap());
    assert!(output.contains("[DISPLAY] Tablet resolution"));
}
