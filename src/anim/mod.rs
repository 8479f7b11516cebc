//! Asynchronous terminal animations.
//!
//! Each animation owns the screen while it runs; the session keeps the
//! prompt suppressed until the completion channel fires (or its fallback
//! timer does). Delays are driven by `gloo-timers` futures.

pub mod matrix;

use std::rc::Rc;

use futures::channel::oneshot;
use gloo_timers::future::TimeoutFuture;

use crate::core::host::Screen;

const HACK_ANIM_BANNER: &str = "\x1b[32m\n\
██╗░░██╗░█████╗░░█████╗░██╗░░██╗██╗███╗░░██╗░██████╗░\n\
██║░░██║██╔══██╗██╔══██╗██║░██╔╝██║████╗░██║██╔════╝░\n\
███████║███████║██║░░╚═╝█████═╝░██║██╔██╗██║██║░░██╗░\n\
██╔══██║██╔══██║██║░░██╗██╔═██╗░██║██║╚████║██║░░╚██╗\n\
██║░░██║██║░░██║╚█████╔╝██║░╚██╗██║██║░╚███║╚██████╔╝\n\
╚═╝░░╚═╝╚═╝░░╚═╝░╚════╝░╚═╝░░╚═╝╚═╝╚═╝░░╚══╝░╚═════╝░\n\
\x1b[0m";

/// Intrusion steps with the pause (ms) after each line.
const HACK_STEPS: &[(&str, u32)] = &[
    ("Bypassing security measures...", 1000),
    ("Analyzing network topology...", 800),
    ("Searching for vulnerabilities...", 1200),
    ("CVE-2023-9876 detected! Exploiting...", 1500),
    ("\x1b[31mAccess denied. Initiating brute force...\x1b[0m", 1000),
    ("Generating password combinations...", 900),
    ("Testing password: ********", 600),
    ("Testing password: ************", 500),
    ("Testing password: **************", 400),
    ("\x1b[32mPassword match found!\x1b[0m", 1000),
    ("Establishing secure connection...", 800),
    ("Bypassing 2FA mechanisms...", 1100),
    ("Escalating privileges...", 900),
    ("\x1b[32mRoot access granted!\x1b[0m", 1200),
    ("Downloading sensitive data...", 1500),
    ("Covering tracks...", 1000),
    ("Erasing system logs...", 700),
    ("Implementing backdoor for future access...", 1300),
    ("\x1b[32mSystem compromised successfully!\x1b[0m", 1000),
];

const SCAN_STEPS: &[&str] = &[
    "Performing host discovery...",
    "Initiating ARP ping scan...",
    "Host is up (0.0042s latency).",
    "Scanning 1000 common ports...",
    "Service detection initiated...",
];

const SCAN_PORTS: &[(u16, &str, &str)] = &[
    (22, "ssh", "OpenSSH 8.2p1"),
    (80, "http", "nginx 1.18.0"),
    (443, "https", "TLS v1.3"),
    (3306, "mysql", "MySQL 8.0.27"),
];

/// Uniform random delay around `speed` ms.
fn jitter(speed: u32) -> u32 {
    (js_sys::Math::random() * speed as f64 + speed as f64 / 2.0) as u32
}

/// Type `text` character by character with slight speed variation.
async fn type_writer(screen: &Rc<dyn Screen>, text: &str, speed: u32) {
    for line in text.split('\n') {
        let mut buf = [0u8; 4];
        for ch in line.chars() {
            screen.write(ch.encode_utf8(&mut buf));
            TimeoutFuture::new(jitter(speed)).await;
        }
        screen.write("\r\n");
        TimeoutFuture::new(speed).await;
    }
}

/// Play the fake intrusion sequence, then signal completion.
pub async fn run_hack(screen: Rc<dyn Screen>, done: oneshot::Sender<()>) {
    screen.write(HACK_ANIM_BANNER);
    screen.write("\r\n\r\n");

    for (text, delay) in HACK_STEPS {
        type_writer(&screen, text, 20).await;
        TimeoutFuture::new(*delay).await;
    }

    screen.write(
        "\r\n\r\n\x1b[33mDISCLAIMER: This is just a simulation! No actual hacking occurred.\x1b[0m\r\n",
    );
    let _ = done.send(());
}

/// Play the fake port scan against `target`, then signal completion.
pub async fn run_scan(screen: Rc<dyn Screen>, target: String, done: oneshot::Sender<()>) {
    screen.write(&format!("[🔍] Starting scan of {target}...\r\n\r\n"));

    for step in SCAN_STEPS {
        screen.write(&format!("{step}\r\n"));
        TimeoutFuture::new(500).await;
    }

    screen.write("\r\nPORT      STATE   SERVICE     VERSION\r\n");
    screen.write("------------------------------------------\r\n");
    for (port, service, banner) in SCAN_PORTS {
        screen.write(&format!("Analyzing port {port}... "));
        TimeoutFuture::new(600).await;
        screen.write(&format!("\r{port}/tcp   open    {service:<10} {banner}\r\n"));
        TimeoutFuture::new(800).await;
    }

    screen.write("\r\nScan completed: 4 services detected\r\n");
    screen.write("Scan duration: 5.78 seconds\r\n");
    TimeoutFuture::new(500).await;
    let _ = done.send(());
}
