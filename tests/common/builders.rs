//! Builders producing scene file text for tests

#![allow(dead_code)]

/// Builds the text of a scene file.
///
/// Every section the report reads is filled with plain defaults. Extra lines
/// added with [`SceneBuilder::with_line`] are appended last, so they replace
/// any default value at the same path.
pub struct SceneBuilder {
    header: Option<String>,
    compact: bool,
    channels: u32,
    routing: String,
    user_routing: Vec<u32>,
    extra: Vec<String>,
}

impl SceneBuilder {
    /// Full-size console scene with a `#4.0#` header.
    pub fn x32() -> Self {
        Self {
            header: Some("#4.0# \"Test Scene\" \"FOH\" %000000000 1".to_string()),
            compact: false,
            channels: 32,
            routing: "AN1-8 AN9-16 AN17-24 AN25-32 AUX1-4".to_string(),
            user_routing: (1..=32).collect(),
            extra: Vec::new(),
        }
    }

    /// Headerless rack mixer scene.
    pub fn xair() -> Self {
        Self {
            header: None,
            compact: true,
            channels: 16,
            routing: String::new(),
            user_routing: Vec::new(),
            extra: Vec::new(),
        }
    }

    pub fn with_header(mut self, header: &str) -> Self {
        self.header = Some(header.to_string());
        self
    }

    pub fn without_header(mut self) -> Self {
        self.header = None;
        self
    }

    pub fn with_channels(mut self, channels: u32) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_routing(mut self, routing: &str) -> Self {
        self.routing = routing.to_string();
        self
    }

    pub fn with_user_routing(mut self, codes: &[u32]) -> Self {
        self.user_routing = codes.to_vec();
        self
    }

    pub fn with_line(mut self, line: &str) -> Self {
        self.extra.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut lines = Vec::new();
        if let Some(header) = &self.header {
            lines.push(header.clone());
        }
        if self.compact {
            self.push_compact(&mut lines);
        } else {
            self.push_full(&mut lines);
        }
        lines.extend(self.extra.iter().cloned());
        lines.join("\n") + "\n"
    }

    fn push_full(&self, lines: &mut Vec<String>) {
        lines.push(format!("/config/chlink {}", offs((self.channels + 1) / 2)));
        lines.push(format!("/config/auxlink {}", offs(4)));
        lines.push(format!("/config/fxlink {}", offs(4)));
        lines.push(format!("/config/buslink {}", offs(8)));
        lines.push(format!("/config/mtxlink {}", offs(3)));
        lines.push(format!("/config/routing/IN {}", self.routing));
        lines.push(format!("/config/userrout/in {}", join(&self.user_routing)));

        for id in 1..=self.channels {
            let ch = format!("ch/{:02}", id);
            lines.push(format!("/{}/config \"Ch {:02}\" 1 GN {}", ch, id, id));
            lines.push(format!("/{}/preamp +0.0 OFF OFF 24 101", ch));
            lines.push(format!("/{}/gate OFF EXP2 -80.0 60.0 7 10 199 0", ch));
            lines.push(format!("/{}/dyn OFF COMP PEAK LIN RMS 0 -10.0 3.0 7 0.00 1 10.0 151 POST 0 100 OFF", ch));
            lines.push(format!("/{}/insert OFF POST OFF", ch));
        }
        for id in 1..=8 {
            lines.push(format!("/auxin/{:02}/config \"Aux {}\" 55 YE {}", id, id, 32 + id));
        }
        for id in 1..=8 {
            lines.push(format!("/fxrtn/{:02}/config \"Rtn {}\" 1 WHi 0", id, id));
        }
        for id in 1..=16 {
            lines.push(format!("/bus/{:02}/config \"Bus {}\" 1 CY", id, id));
            lines.push(format!("/bus/{:02}/dyn OFF COMP PEAK LIN RMS", id));
            lines.push(format!("/bus/{:02}/insert OFF POST OFF", id));
        }
        for id in 1..=6 {
            lines.push(format!("/mtx/{:02}/config \"Mtx {}\" 1 WH", id, id));
            lines.push(format!("/mtx/{:02}/insert OFF POST OFF", id));
        }
        for main in ["st", "m"] {
            lines.push(format!("/main/{}/config \"\" 1 WH", main));
            lines.push(format!("/main/{}/dyn OFF COMP PEAK LIN RMS", main));
            lines.push(format!("/main/{}/insert OFF POST OFF", main));
        }
        let devices = ["HALL", "DLY", "RPLT", "CMB", "GEQ", "GEQ", "P1A", "XYZ"];
        for (index, device) in devices.iter().enumerate() {
            lines.push(format!("/fx/{} {}", index + 1, device));
            if index < 4 {
                lines.push(format!("/fx/{}/source INS MON", index + 1));
            }
        }
    }

    fn push_compact(&self, lines: &mut Vec<String>) {
        lines.push(format!("/config/chlink {}", offs((self.channels + 1) / 2)));
        lines.push(format!("/config/buslink {}", offs(3)));

        for id in 1..=self.channels {
            let ch = format!("ch/{:02}", id);
            lines.push(format!("/{}/config \"Ch {:02}\" 1 2 {}", ch, id, id));
            lines.push(format!("/{}/preamp +0.0 OFF OFF 24 101", ch));
            lines.push(format!("/{}/gate OFF EXP2 -80.0 60.0 7 10 199 0", ch));
            lines.push(format!("/{}/dyn OFF COMP PEAK LIN RMS", ch));
            lines.push(format!("/{}/insert OFF FX1", ch));
        }
        for id in 1..=6 {
            lines.push(format!("/bus/{}/config \"Bus {}\" 1 6", id, id));
            lines.push(format!("/bus/{}/dyn OFF COMP PEAK LIN RMS", id));
            lines.push(format!("/bus/{}/insert OFF FX1", id));
        }
        lines.push("/lr/config \"\" 1 7".to_string());
        lines.push("/lr/dyn OFF COMP PEAK LIN RMS".to_string());
        lines.push("/lr/insert OFF FX1".to_string());
        for (index, device) in ["HALL", "DLY", "RPLT", "GEQ"].iter().enumerate() {
            lines.push(format!("/fx/{} {}", index + 1, device));
        }
    }
}

fn offs(count: u32) -> String {
    vec!["OFF"; count as usize].join(" ")
}

fn join(codes: &[u32]) -> String {
    codes
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
