pub const PROBE: &str = include_str!("../data/prompts/probe.txt");
