use rule_tagger::{Lexicon, Tagger};

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: tag_sentence <lexicon.txt> <sentence>...");
        std::process::exit(2);
    };

    let lexicon = match Lexicon::from_path(&path) {
        Ok(lexicon) => lexicon,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    let tagger = Tagger::new(lexicon);

    for sentence in args {
        let tagged: Vec<String> = tagger.tag(&sentence).iter().map(|t| t.to_string()).collect();
        println!("{}", tagged.join(" "));
    }
}
