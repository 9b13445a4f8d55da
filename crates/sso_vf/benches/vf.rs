use divan::AllocProfiler;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

pub mod read {
    use divan::Bencher;
    use sso_vf::{VfEntry, VfFile};

    fn get_input() -> Vec<u8> {
        let mut manifest = VfFile::new(1);
        for index in 0..4096u32 {
            let mut entry = VfEntry::new();
            entry.set_file_name(&format!("asset_{index:04}.dds"));
            entry.set_file_path(&format!("art/textures/asset_{index:04}.dds"));
            entry.set_file_size(index * 16);
            entry.set_source_file_number(index % 8);
            manifest.add_entry(entry).unwrap();
        }
        manifest.encode().unwrap()
    }

    #[divan::bench]
    fn open(bencher: Bencher) {
        bencher.with_inputs(get_input).bench_refs(|data| {
            divan::black_box(VfFile::decode(data).unwrap());
        });
    }

    #[divan::bench]
    fn access_entry(bencher: Bencher) {
        bencher
            .with_inputs(|| VfFile::decode(&get_input()).unwrap())
            .bench_refs(|manifest| {
                divan::black_box(manifest.entry(0).unwrap());
            });
    }
}

pub mod write {
    use divan::Bencher;
    use sso_vf::{VfEntry, VfFile};

    fn get_manifest() -> VfFile {
        let mut manifest = VfFile::new(1);
        for index in 0..4096u32 {
            let mut entry = VfEntry::new();
            entry.set_file_name(&format!("asset_{index:04}.dds"));
            entry.set_file_path(&format!("art/textures/asset_{index:04}.dds"));
            entry.set_file_size(index * 16);
            manifest.add_entry(entry).unwrap();
        }
        manifest
    }

    #[divan::bench]
    fn encode(bencher: Bencher) {
        bencher.with_inputs(get_manifest).bench_refs(|manifest| {
            divan::black_box(manifest.encode().unwrap());
        });
    }
}
